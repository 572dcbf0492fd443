fn main() {
    let presenter_factory = starwheel::PixelsPresenterFactory::new();
    let command = starwheel::RunGuiCommand::new(presenter_factory);

    command.execute();
}
