fn main() -> Result<(), Box<dyn std::error::Error>> {
    starwheel::snapshot_controller(800, 600, "output/starfield.ppm")
}
