//! Gapped vertical obstacles and the queue that scrolls them

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::GameConfig;

/// A vertical obstacle with an opening the actor must pass through.
///
/// Segment geometry is computed once at construction; only `x` and
/// `scored` change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Leading (left) edge
    pub x: f32,
    pub width: f32,
    pub gap_center: f32,
    pub gap_height: f32,
    /// Set once the actor has been credited for passing this obstacle
    pub scored: bool,
    /// Leftward movement per tick
    pub speed: f32,
    top_height: f32,
    bottom_y: f32,
    bottom_height: f32,
}

impl Obstacle {
    /// Build an obstacle. The caller keeps `gap_center` inside the safe range;
    /// a center outside it yields a negative segment height.
    pub fn new(id: u32, x: f32, gap_center: f32, config: &GameConfig) -> Self {
        let half_gap = config.gap_height / 2.0;
        let top_height = gap_center - half_gap;
        let bottom_y = gap_center + half_gap;
        Self {
            id,
            x,
            width: config.obstacle_width,
            gap_center,
            gap_height: config.gap_height,
            scored: false,
            speed: config.obstacle_speed,
            top_height,
            bottom_y,
            bottom_height: config.window_height - bottom_y,
        }
    }

    /// Scroll one tick to the left
    pub fn update(&mut self) {
        self.x -= self.speed;
    }

    /// Height of the segment above the gap
    #[inline]
    pub fn top_height(&self) -> f32 {
        self.top_height
    }

    /// Where the segment below the gap starts
    #[inline]
    pub fn bottom_y(&self) -> f32 {
        self.bottom_y
    }

    #[inline]
    pub fn bottom_height(&self) -> f32 {
        self.bottom_height
    }

    /// Trailing (right) edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.top_height)
    }

    pub fn bottom_rect(&self) -> Rect {
        Rect::new(self.x, self.bottom_y, self.width, self.bottom_height)
    }

    /// The opening between the two segments
    pub fn gap_rect(&self) -> Rect {
        Rect::new(self.x, self.top_height, self.width, self.gap_height)
    }

    /// Fully scrolled past the left edge of the window
    pub fn is_off_screen(&self) -> bool {
        self.right() <= 0.0
    }
}

/// Live obstacles in spawn order, which is also left-to-right screen order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObstacleQueue {
    obstacles: Vec<Obstacle>,
}

impl ObstacleQueue {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::new(),
        }
    }

    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Scroll every obstacle one tick
    pub fn advance(&mut self) {
        for obstacle in &mut self.obstacles {
            obstacle.update();
        }
    }

    /// Drop obstacles whose trailing edge has left the screen, keeping order.
    /// Returns how many were removed.
    pub fn prune(&mut self) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_off_screen());
        before - self.obstacles.len()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Obstacle> {
        self.obstacles.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Obstacle> {
        self.obstacles.iter_mut()
    }

    /// First obstacle the actor at `x` has not yet fully passed
    pub fn next_ahead_of(&self, x: f32) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.right() >= x)
    }
}

impl<'a> IntoIterator for &'a ObstacleQueue {
    type Item = &'a Obstacle;
    type IntoIter = std::slice::Iter<'a, Obstacle>;

    fn into_iter(self) -> Self::IntoIter {
        self.obstacles.iter()
    }
}
