//! Collision detection between the actor, obstacles and the window bounds
//!
//! All checks share one edge policy: touching counts as contact. Rectangle
//! overlap is boundary-inclusive, ground contact is `>=`, ceiling contact
//! is `<=`.

use super::actor::Actor;
use super::obstacle::Obstacle;

/// Actor rectangle overlaps the segment above or below the obstacle's gap
pub fn collides_with_obstacle(actor: &Actor, obstacle: &Obstacle) -> bool {
    let actor_rect = actor.rect();
    actor_rect.intersects(&obstacle.top_rect()) || actor_rect.intersects(&obstacle.bottom_rect())
}

/// Actor's bottom edge has reached the bottom of the window
pub fn collides_with_ground(actor: &Actor, window_height: f32) -> bool {
    actor.pos.y + actor.size.y >= window_height
}

/// Actor's top edge is at the top of the window
pub fn collides_with_ceiling(actor: &Actor) -> bool {
    actor.pos.y <= 0.0
}

/// Actor's left edge is beyond the obstacle's trailing edge
pub fn has_passed(actor: &Actor, obstacle: &Obstacle) -> bool {
    actor.pos.x > obstacle.right()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use glam::Vec2;

    fn setup() -> (GameConfig, Actor, Obstacle) {
        let config = GameConfig::default();
        let actor = Actor::new(&config);
        let obstacle = Obstacle::new(1, 100.0, config.window_height / 2.0, &config);
        (config, actor, obstacle)
    }

    #[test]
    fn test_no_collision_in_gap() {
        let (_, mut actor, obstacle) = setup();
        actor.pos = Vec2::new(obstacle.x + 10.0, obstacle.gap_center - actor.size.y / 2.0);
        assert!(!collides_with_obstacle(&actor, &obstacle));
    }

    #[test]
    fn test_collision_with_top_segment() {
        let (_, mut actor, obstacle) = setup();
        actor.pos = Vec2::new(obstacle.x + 10.0, obstacle.top_height() - 10.0);
        assert!(collides_with_obstacle(&actor, &obstacle));
    }

    #[test]
    fn test_collision_with_bottom_segment() {
        let (_, mut actor, obstacle) = setup();
        actor.pos = Vec2::new(obstacle.x + 10.0, obstacle.bottom_y() + 10.0);
        assert!(collides_with_obstacle(&actor, &obstacle));
    }

    #[test]
    fn test_gap_boundary_overlap_by_one_unit() {
        let (_, mut actor, obstacle) = setup();
        actor.pos.x = obstacle.x + 10.0;

        // Fully inside the gap with one unit of clearance on each side
        actor.pos.y = obstacle.top_height() + 1.0;
        assert!(!collides_with_obstacle(&actor, &obstacle));
        actor.pos.y = obstacle.bottom_y() - actor.size.y - 1.0;
        assert!(!collides_with_obstacle(&actor, &obstacle));

        // One unit into either segment
        actor.pos.y = obstacle.top_height() - 1.0;
        assert!(collides_with_obstacle(&actor, &obstacle));
        actor.pos.y = obstacle.bottom_y() - actor.size.y + 1.0;
        assert!(collides_with_obstacle(&actor, &obstacle));
    }

    #[test]
    fn test_touching_segment_edge_counts() {
        let (_, mut actor, obstacle) = setup();
        actor.pos = Vec2::new(obstacle.x + 10.0, obstacle.top_height());
        assert!(collides_with_obstacle(&actor, &obstacle));
    }

    #[test]
    fn test_no_collision_when_clear_horizontally() {
        let (config, mut actor, obstacle) = setup();
        actor.pos = Vec2::new(obstacle.right() + 50.0, config.window_height / 2.0);
        assert!(!collides_with_obstacle(&actor, &obstacle));
        actor.pos = Vec2::new(obstacle.x - actor.size.x - 1.0, 0.0);
        assert!(!collides_with_obstacle(&actor, &obstacle));
    }

    #[test]
    fn test_high_and_low_gaps() {
        let config = GameConfig::default();
        let high = Obstacle::new(1, 150.0, 100.0, &config);
        let low = Obstacle::new(2, 200.0, config.window_height - 100.0, &config);
        let mut actor = Actor::new(&config);

        actor.pos = Vec2::new(160.0, 90.0);
        assert!(!collides_with_obstacle(&actor, &high));

        actor.pos = Vec2::new(210.0, config.window_height - 110.0);
        assert!(!collides_with_obstacle(&actor, &low));
    }

    #[test]
    fn test_ground() {
        let (config, mut actor, _) = setup();
        actor.pos.y = config.window_height - actor.size.y - 0.5;
        assert!(!collides_with_ground(&actor, config.window_height));
        actor.pos.y = config.window_height - actor.size.y;
        assert!(collides_with_ground(&actor, config.window_height));
        actor.pos.y = config.window_height + 40.0;
        assert!(collides_with_ground(&actor, config.window_height));
    }

    #[test]
    fn test_ceiling() {
        let (_, mut actor, _) = setup();
        assert!(!collides_with_ceiling(&actor));
        actor.pos.y = 0.0;
        assert!(collides_with_ceiling(&actor));
    }

    #[test]
    fn test_has_passed_is_strict() {
        let (_, mut actor, obstacle) = setup();
        actor.pos.x = obstacle.right();
        assert!(!has_passed(&actor, &obstacle));
        actor.pos.x = obstacle.right() + 0.5;
        assert!(has_passed(&actor, &obstacle));
    }
}
