use ggez::graphics::Rect;
use ggez::input::keyboard::KeyCode;
use ggez::GameResult;
use log::debug;
use std::time::Duration;

use crate::config::GameConfig;
use crate::entity::{Direction, Entity, Position, Size};
use crate::render::{Surface, SNAKE_COLOR};

fn cell_rect(position: Position, size: Size) -> Rect {
    Rect::new(
        position.x as f32,
        position.y as f32,
        size.w as f32,
        size.h as f32,
    )
}

/// One trailing body unit of the snake
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    position: Position,
    facing: Direction,
    size: Size,
}

impl Segment {
    pub fn new(position: Position, facing: Direction, size: Size) -> Self {
        Self {
            position,
            facing,
            size,
        }
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    /// Take over the place of the unit ahead of this one
    pub fn follow(&mut self, position: Position, facing: Direction) {
        self.position = position;
        self.facing = facing;
    }
}

impl Entity for Segment {
    fn position(&self) -> Position {
        self.position
    }

    fn size(&self) -> Size {
        self.size
    }

    fn handle_input(&mut self, _key: KeyCode) {}

    // Segments only move when the head drags them along
    fn update(&mut self, _dt: Duration) {}

    fn draw(&self, surface: &mut dyn Surface) -> GameResult {
        surface.draw_rect(cell_rect(self.position, self.size), SNAKE_COLOR)
    }

    fn collides(&self, other: &dyn Entity) -> bool {
        self.position == other.position()
    }
}

/// The snake's head, which also owns and drives the body chain.
///
/// Movement is quantized to the grid: the head only advances one cell once
/// the accumulated time reaches `move_interval`, no matter how often
/// [`Entity::update`] is called.
#[derive(Debug, Clone)]
pub struct Snake {
    position: Position,
    size: Size,
    dx: i32,
    dy: i32,
    speed: i32,
    move_interval: f64,
    speed_up_factor: f64,
    score: u32,
    alive: bool,
    /// Index 0 sits right behind the head
    body: Vec<Segment>,
    last_direction: Option<Direction>,
    since_move: Duration,
    since_score: Duration,
    score_interval: Duration,
    max_x: i32,
    max_y: i32,
}

impl Snake {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            position: config.spawn,
            size: Size::square(config.cell),
            dx: 0,
            dy: 0,
            speed: config.cell,
            move_interval: config.initial_move_interval,
            speed_up_factor: config.speed_up_factor,
            score: 0,
            alive: true,
            body: Vec::new(),
            last_direction: None,
            since_move: Duration::ZERO,
            since_score: Duration::ZERO,
            score_interval: config.score_interval(),
            max_x: config.max_x(),
            max_y: config.max_y(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn body(&self) -> &[Segment] {
        &self.body
    }

    pub fn velocity(&self) -> (i32, i32) {
        (self.dx, self.dy)
    }

    pub fn move_interval(&self) -> f64 {
        self.move_interval
    }

    pub fn last_direction(&self) -> Option<Direction> {
        self.last_direction
    }

    /// Current direction of travel. A snake that has not moved yet reports North,
    /// and growing before the first turn locks that in as the last direction.
    pub fn direction(&self) -> Direction {
        if self.dx > 0 {
            Direction::East
        } else if self.dx < 0 {
            Direction::West
        } else if self.dy > 0 {
            Direction::South
        } else {
            Direction::North
        }
    }

    /// Steer towards `direction` unless that would turn straight back.
    /// Returns whether the turn was accepted.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if let Some(last) = self.last_direction {
            if last.is_opposite(direction) {
                debug!("Ignoring reversal from {:?} to {:?}", last, direction);
                return false;
            }
        }

        let (ux, uy) = direction.delta();
        self.dx = ux * self.speed;
        self.dy = uy * self.speed;
        self.last_direction = Some(direction);
        true
    }

    /// Eat: score a point, add a segment at the tail and speed up.
    pub fn grow(&mut self) {
        self.score += 1;
        self.extend_body();
        self.move_faster();
    }

    fn extend_body(&mut self) {
        let travel = self.direction();
        let (anchor, facing) = match self.body.last() {
            Some(tail) => (tail.position(), tail.facing()),
            None => (self.position, travel),
        };
        let (ux, uy) = travel.delta();
        let spawn = anchor.moved_by(-ux * self.size.w, -uy * self.size.h);
        self.body.push(Segment::new(spawn, facing, self.size));
        if self.last_direction.is_none() {
            self.last_direction = Some(travel);
        }
    }

    fn move_faster(&mut self) {
        self.move_interval *= self.speed_up_factor;
    }

    fn in_bounds(&self) -> bool {
        (0..=self.max_x).contains(&self.position.x) && (0..=self.max_y).contains(&self.position.y)
    }

    /// One grid step: the chain shuffles back, then the head advances.
    fn step(&mut self) {
        for i in (1..self.body.len()).rev() {
            let ahead = self.body[i - 1];
            self.body[i].follow(ahead.position(), ahead.facing());
        }
        let (position, facing) = (self.position, self.direction());
        if let Some(first) = self.body.first_mut() {
            first.follow(position, facing);
        }

        self.position = self.position.moved_by(self.dx, self.dy);
    }
}

impl Entity for Snake {
    fn position(&self) -> Position {
        self.position
    }

    fn size(&self) -> Size {
        self.size
    }

    fn handle_input(&mut self, key: KeyCode) {
        if let Some(direction) = Direction::from_keycode(key) {
            self.steer(direction);
        }
    }

    fn update(&mut self, dt: Duration) {
        if !self.alive {
            return;
        }

        self.since_move += dt;
        self.since_score += dt;

        if self.body.iter().any(|segment| self.collides(segment)) {
            debug!("Snake ran into itself at {:?}", self.position);
            self.alive = false;
        }
        if !self.in_bounds() {
            debug!("Snake left the play area at {:?}", self.position);
            self.alive = false;
        }

        // The tick that detects death still finishes; only later ticks are skipped
        if self.since_score >= self.score_interval {
            self.score += 1;
            self.since_score = Duration::ZERO;
            self.move_faster();
            debug!("Passive score tick, score is now {}", self.score);
        }

        if self.since_move.as_secs_f64() >= self.move_interval {
            self.step();
            self.since_move = Duration::ZERO;
        }
    }

    fn draw(&self, surface: &mut dyn Surface) -> GameResult {
        surface.draw_rect(cell_rect(self.position, self.size), SNAKE_COLOR)?;
        for segment in &self.body {
            segment.draw(surface)?;
        }
        Ok(())
    }

    fn collides(&self, other: &dyn Entity) -> bool {
        self.position == other.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::RecordingSurface;

    const STEP: Duration = Duration::from_millis(250);

    fn snake() -> Snake {
        Snake::new(&GameConfig::default())
    }

    fn moving(direction: Direction) -> Snake {
        let mut snake = snake();
        assert!(snake.steer(direction));
        snake
    }

    #[test]
    fn test_new_snake() {
        let snake = snake();
        assert_eq!(snake.position(), Position::new(400, 400));
        assert_eq!(snake.velocity(), (0, 0));
        assert_eq!(snake.score(), 0);
        assert!(snake.is_alive());
        assert!(snake.body().is_empty());
        assert_eq!(snake.last_direction(), None);
    }

    #[test]
    fn test_steering_sets_single_axis() {
        let mut snake = snake();
        let keys = [
            KeyCode::D,
            KeyCode::S,
            KeyCode::Left,
            KeyCode::Up,
            KeyCode::Right,
            KeyCode::A,
            KeyCode::Return,
            KeyCode::Down,
        ];
        for key in keys {
            snake.handle_input(key);
            let (dx, dy) = snake.velocity();
            assert!(dx == 0 || dy == 0);
            snake.update(STEP);
            let (dx, dy) = snake.velocity();
            assert!(dx == 0 || dy == 0);
        }
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut snake = moving(Direction::East);
        snake.handle_input(KeyCode::A);
        assert_eq!(snake.velocity(), (50, 0));
        assert_eq!(snake.last_direction(), Some(Direction::East));

        snake.handle_input(KeyCode::W);
        assert_eq!(snake.velocity(), (0, -50));
        assert!(!snake.steer(Direction::South));
        assert_eq!(snake.velocity(), (0, -50));
        assert_eq!(snake.last_direction(), Some(Direction::North));
    }

    #[test]
    fn test_no_accepted_turn_reverses_the_previous_one() {
        let mut snake = snake();
        let sequence = [
            Direction::East,
            Direction::West,
            Direction::North,
            Direction::South,
            Direction::West,
            Direction::East,
            Direction::South,
        ];
        let mut previous: Option<Direction> = None;
        for direction in sequence {
            if snake.steer(direction) {
                if let Some(prev) = previous {
                    assert!(!prev.is_opposite(direction));
                }
                previous = Some(direction);
            }
        }
        assert_eq!(previous, Some(Direction::South));
    }

    #[test]
    fn test_movement_waits_for_interval() {
        let mut snake = moving(Direction::East);
        snake.update(Duration::from_millis(100));
        assert_eq!(snake.position(), Position::new(400, 400));
        snake.update(Duration::from_millis(100));
        assert_eq!(snake.position(), Position::new(450, 400));
        // The timer restarts after a step
        snake.update(Duration::from_millis(100));
        assert_eq!(snake.position(), Position::new(450, 400));
    }

    #[test]
    fn test_grow_on_eat() {
        let mut snake = moving(Direction::East);
        snake.update(STEP);
        assert_eq!(snake.position(), Position::new(450, 400));

        let before = snake.move_interval();
        snake.grow();
        assert_eq!(snake.score(), 1);
        assert_eq!(snake.body().len(), 1);
        assert!(snake.move_interval() < before);
        assert!((snake.move_interval() - before * 0.99).abs() < 1e-12);

        let segment = snake.body()[0];
        assert_eq!(segment.position(), Position::new(400, 400));
        assert_eq!(segment.facing(), Direction::East);

        snake.grow();
        assert_eq!(snake.body()[1].position(), Position::new(350, 400));
    }

    #[test]
    fn test_growing_while_stationary_extends_south() {
        let mut snake = snake();
        snake.grow();
        assert_eq!(snake.body()[0].position(), Position::new(400, 450));
        assert_eq!(snake.body()[0].facing(), Direction::North);

        // Turning back onto the new segment is a reversal
        assert_eq!(snake.last_direction(), Some(Direction::North));
        snake.handle_input(KeyCode::S);
        assert_eq!(snake.velocity(), (0, 0));
        assert!(snake.steer(Direction::East));
    }

    #[test]
    fn test_death_tick_still_scores() {
        let mut snake = moving(Direction::North);
        let tick = Duration::from_millis(310);
        for _ in 0..9 {
            snake.update(tick);
            assert!(snake.is_alive());
        }
        assert_eq!(snake.position(), Position::new(400, -50));
        assert_eq!(snake.score(), 0);

        // 3.10s in: the wall and the score timer land on the same tick
        snake.update(tick);
        assert!(!snake.is_alive());
        assert_eq!(snake.score(), 1);

        snake.update(Duration::from_secs(5));
        assert_eq!(snake.score(), 1);
    }

    #[test]
    fn test_passive_scoring_every_three_seconds() {
        let mut snake = snake();
        let tick = Duration::from_millis(100);
        for _ in 0..29 {
            snake.update(tick);
        }
        assert_eq!(snake.score(), 0);
        snake.update(tick);
        assert_eq!(snake.score(), 1);
        for _ in 0..30 {
            snake.update(tick);
        }
        assert_eq!(snake.score(), 2);
        assert!(snake.body().is_empty());
        assert!((snake.move_interval() - 0.2 * 0.99 * 0.99).abs() < 1e-12);
        assert!(snake.is_alive());
    }

    #[test]
    fn test_segments_lag_behind_head() {
        let mut snake = moving(Direction::East);
        for _ in 0..3 {
            snake.grow();
        }

        let mut history = Vec::new();
        let turns = [
            Direction::East,
            Direction::East,
            Direction::South,
            Direction::South,
            Direction::South,
        ];
        for direction in turns {
            snake.steer(direction);
            history.push(snake.position());
            snake.update(STEP);
        }

        let n = history.len();
        for (i, segment) in snake.body().iter().enumerate() {
            assert_eq!(segment.position(), history[n - 1 - i]);
        }
        assert_eq!(snake.position(), Position::new(500, 550));
        assert_eq!(snake.body()[0].facing(), Direction::South);
    }

    #[test]
    fn test_self_collision_kills() {
        let mut snake = moving(Direction::East);
        for _ in 0..4 {
            snake.grow();
        }
        for direction in [Direction::South, Direction::West, Direction::North] {
            assert!(snake.steer(direction));
            snake.update(STEP);
            assert!(snake.is_alive());
        }
        assert_eq!(snake.position(), Position::new(350, 400));
        assert_eq!(snake.body()[3].position(), Position::new(350, 400));

        snake.update(Duration::ZERO);
        assert!(!snake.is_alive());
    }

    #[test]
    fn test_leaving_east_edge_kills() {
        let mut snake = moving(Direction::East);
        for _ in 0..7 {
            snake.update(STEP);
        }
        assert_eq!(snake.position(), Position::new(750, 400));
        snake.update(STEP);
        assert_eq!(snake.position(), Position::new(800, 400));
        assert!(snake.is_alive());
        snake.update(STEP);
        assert!(!snake.is_alive());
    }

    #[test]
    fn test_leaving_west_edge_kills() {
        let mut snake = moving(Direction::West);
        for _ in 0..8 {
            snake.update(STEP);
            assert!(snake.is_alive());
        }
        assert_eq!(snake.position(), Position::new(0, 400));
        snake.update(STEP);
        assert_eq!(snake.position(), Position::new(-50, 400));
        snake.update(STEP);
        assert!(!snake.is_alive());
    }

    #[test]
    fn test_dead_snake_stays_put() {
        let mut snake = moving(Direction::North);
        for _ in 0..10 {
            snake.update(STEP);
        }
        assert!(!snake.is_alive());
        let (position, score) = (snake.position(), snake.score());
        snake.update(Duration::from_secs(5));
        assert_eq!(snake.position(), position);
        assert_eq!(snake.score(), score);
    }

    #[test]
    fn test_boundary_follows_configured_area() {
        let config = GameConfig {
            width: 200,
            height: 200,
            spawn: Position::new(100, 100),
            ..Default::default()
        };
        let mut snake = Snake::new(&config);
        snake.steer(Direction::South);
        snake.update(STEP);
        snake.update(STEP);
        assert_eq!(snake.position(), Position::new(100, 200));
        snake.update(STEP);
        assert!(!snake.is_alive());
    }

    #[test]
    fn test_draw_head_and_body() {
        let mut snake = moving(Direction::East);
        snake.grow();
        snake.grow();
        let mut surface = RecordingSurface::new();
        snake.draw(&mut surface).unwrap();
        let rects = surface.rects();
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0], Rect::new(400.0, 400.0, 50.0, 50.0));
    }
}
