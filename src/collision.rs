use crate::entities::{Bird, Pipe};

/// True when the bird overlaps the pipe horizontally and is not fully
/// inside the gap. Edges count as touching.
pub fn collides(bird: &Bird, pipe: &Pipe) -> bool {
    let overlaps_x = bird.x + bird.width >= pipe.x && bird.x <= pipe.x + pipe.width;
    overlaps_x && (bird.y <= pipe.gap_y || bird.y + bird.height >= pipe.y_bottom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PlayArea;
    use bevy::prelude::*;

    const AREA: PlayArea = PlayArea {
        width: 800.0,
        height: 800.0,
    };

    /// Bird at x = 50..100, gap 250..550.
    fn setup(bird_y: f32, pipe_x: f32) -> (Bird, Pipe) {
        let mut bird = Bird::new(50.0, 3000.0, Color::WHITE, AREA);
        bird.y = bird_y;
        let mut pipe = Pipe::new(50.0, 300.0, 500.0, Color::WHITE, AREA);
        pipe.x = pipe_x;
        (bird, pipe)
    }

    #[test]
    fn no_collision_before_the_pipe_arrives() {
        for y in [0.0, 100.0, 375.0, 600.0, 750.0] {
            let (bird, pipe) = setup(y, 101.0);
            assert!(!collides(&bird, &pipe), "y = {y}");
        }
    }

    #[test]
    fn no_collision_after_the_pipe_has_gone() {
        let (bird, pipe) = setup(10.0, -1.0);
        assert!(!collides(&bird, &pipe));
    }

    #[test]
    fn bird_inside_the_gap_is_safe() {
        let (bird, pipe) = setup(375.0, 60.0);
        assert!(!collides(&bird, &pipe));
    }

    #[test]
    fn bottom_breach_collides() {
        let (bird, pipe) = setup(500.0, 50.0);
        assert!(bird.y > pipe.gap_y);
        assert!(collides(&bird, &pipe));
    }

    #[test]
    fn top_breach_collides() {
        let (bird, pipe) = setup(240.0, 75.0);
        assert!(collides(&bird, &pipe));
    }

    #[test]
    fn touching_edges_count() {
        // bird right edge == pipe left edge, bird top == gap top
        let (bird, pipe) = setup(250.0, 100.0);
        assert!(collides(&bird, &pipe));

        // pipe right edge == bird left edge, bird bottom == gap bottom
        let (bird, pipe) = setup(500.0, 0.0);
        assert!(collides(&bird, &pipe));
    }
}
