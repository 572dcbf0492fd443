#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[cfg(test)]
mod tests {
    use super::Point;

    #[test]
    fn points_compare_by_coordinates() {
        let a = Point { x: 3, y: -7 };
        let b = Point { x: 3, y: -7 };
        let c = Point { x: 3, y: 7 };

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
