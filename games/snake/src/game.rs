//! Snake rules: steer, eat, grow, collide, restart

use crate::config::SnakeConfig;
use crate::snake::Snake;
use arcade_core::{
    Color, Direction, Frame, Game, GameEvent, GameRng, GameStatus, KeyEvent, Point, Rect, TextSize,
};
use std::time::Duration;

pub const BODY_COLOR: Color = Color::rgb(45, 180, 0);

/// The snake game on a grid of `unit`-sized cells
#[derive(Debug, Clone)]
pub struct SnakeGame {
    config: SnakeConfig,
    rng: GameRng,
    snake: Snake,
    /// `None` once the snake fills the board
    apple: Option<Point>,
    status: GameStatus,
    won: bool,
    apples_eaten: u32,
}

impl SnakeGame {
    pub fn new(config: SnakeConfig, rng: GameRng) -> Self {
        let snake = Self::spawn_snake(&config);
        let mut game = Self {
            config,
            rng,
            snake,
            apple: None,
            status: GameStatus::Running,
            won: false,
            apples_eaten: 0,
        };
        game.apple = game.place_apple();
        game
    }

    fn spawn_snake(config: &SnakeConfig) -> Snake {
        Snake::new(Point::new(0, 0), config.initial_parts, Direction::Right)
    }

    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> Option<Point> {
        self.apple
    }

    /// The snake filled every cell
    pub fn has_won(&self) -> bool {
        self.won
    }

    fn in_bounds(&self, cell: Point) -> bool {
        let (cols, rows) = self.config.grid();
        (0..cols).contains(&cell.x) && (0..rows).contains(&cell.y)
    }

    /// Pick a random cell the snake does not cover
    fn place_apple(&mut self) -> Option<Point> {
        let (cols, rows) = self.config.grid();
        let free: Vec<Point> = (0..rows)
            .flat_map(|y| (0..cols).map(move |x| Point::new(x, y)))
            .filter(|&cell| !self.snake.occupies(cell))
            .collect();
        self.rng.pick(&free).copied()
    }

    fn cell_rect(&self, cell: Point) -> Rect {
        let unit = self.config.unit;
        Rect::new(cell.x * unit, cell.y * unit, unit, unit)
    }

    fn end(&mut self, events: &mut Vec<GameEvent>) {
        self.status = GameStatus::GameOver;
        events.push(GameEvent::GameOver {
            score: self.apples_eaten,
        });
    }
}

impl Game for SnakeGame {
    fn title(&self) -> &str {
        "Snake Game"
    }

    fn size(&self) -> (i32, i32) {
        (self.config.board_width, self.config.board_height)
    }

    fn tick_interval(&self) -> Duration {
        self.config.tick_interval()
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn score(&self) -> u32 {
        self.apples_eaten
    }

    fn on_key(&mut self, event: KeyEvent) -> Vec<GameEvent> {
        if !event.is_press() {
            return Vec::new();
        }
        match self.status {
            GameStatus::Running => {
                if let Some(dir) = Direction::from_key(event.key) {
                    self.snake.turn(dir);
                }
                Vec::new()
            }
            GameStatus::GameOver if event.key.is_letter('r') => {
                self.restart();
                vec![GameEvent::Restarted]
            }
            GameStatus::GameOver => Vec::new(),
        }
    }

    fn update(&mut self) -> Vec<GameEvent> {
        if self.status.is_over() {
            return Vec::new();
        }
        let mut events = Vec::new();

        let tail = self.snake.step();
        let head = self.snake.head();

        if self.apple == Some(head) {
            self.snake.grow(tail);
            self.apples_eaten += 1;
            events.push(GameEvent::Scored {
                points: 1,
                total: self.apples_eaten,
            });

            self.apple = self.place_apple();
            if self.apple.is_some() {
                events.push(GameEvent::Spawned("apple"));
            } else {
                self.won = true;
                self.end(&mut events);
                return events;
            }
        }

        if !self.in_bounds(head) || self.snake.bites_itself() {
            self.end(&mut events);
        }
        events
    }

    fn view(&self, frame: &mut Frame) {
        let (width, height) = self.size();
        let unit = self.config.unit;
        let (cols, rows) = self.config.grid();
        frame.clear(Color::BLACK);
        let score = format!("Score: {}", self.apples_eaten);

        if self.status.is_over() {
            frame.centered_text(score, 40, TextSize::Medium, Color::RED);
            let title = if self.won { "You Win" } else { "Game Over" };
            frame.centered_text(title, height / 2, TextSize::Large, Color::RED);
            frame.centered_text(
                "Press R to Restart",
                height / 2 + 40,
                TextSize::Small,
                Color::RED,
            );
            return;
        }

        for i in 0..cols {
            frame.line(i * unit, 0, i * unit, height, Color::DARK_GRAY);
        }
        for j in 0..rows {
            frame.line(0, j * unit, width, j * unit, Color::DARK_GRAY);
        }

        if let Some(apple) = self.apple {
            frame.fill_oval(self.cell_rect(apple), Color::RED);
        }

        // tail first so the head stays visible over stacked parts
        let cells: Vec<Point> = self.snake.cells().copied().collect();
        for &cell in cells.iter().skip(1).rev() {
            frame.fill_rect(self.cell_rect(cell), BODY_COLOR);
        }
        frame.fill_rect(self.cell_rect(self.snake.head()), Color::GREEN);

        frame.centered_text(score, 40, TextSize::Medium, Color::RED);
    }

    fn restart(&mut self) {
        self.snake = Self::spawn_snake(&self.config);
        self.status = GameStatus::Running;
        self.won = false;
        self.apples_eaten = 0;
        self.apple = self.place_apple();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_core::{DrawCmd, Key};

    fn game() -> SnakeGame {
        SnakeGame::new(SnakeConfig::default(), GameRng::new(3))
    }

    fn run(game: &mut SnakeGame, ticks: usize) -> Vec<GameEvent> {
        (0..ticks).flat_map(|_| game.update()).collect()
    }

    #[test]
    fn test_initial_state() {
        let g = game();
        assert_eq!(g.snake().len(), 6);
        assert_eq!(g.snake().head(), Point::new(0, 0));
        let apple = g.apple().unwrap();
        assert_ne!(apple, Point::new(0, 0));
        assert!(g.in_bounds(apple));
        assert_eq!(g.tick_interval(), Duration::from_millis(75));
    }

    #[test]
    fn test_moves_right() {
        let mut g = game();
        g.apple = Some(Point::new(20, 20));
        run(&mut g, 3);
        assert_eq!(g.snake().head(), Point::new(3, 0));
        assert_eq!(g.status(), GameStatus::Running);
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut g = game();
        g.apple = Some(Point::new(2, 0));
        assert!(g.update().is_empty());

        let events = g.update();
        assert_eq!(
            events,
            vec![
                GameEvent::Scored {
                    points: 1,
                    total: 1
                },
                GameEvent::Spawned("apple"),
            ]
        );
        assert_eq!(g.snake().len(), 7);
        assert_eq!(g.score(), 1);
        let apple = g.apple().unwrap();
        assert!(!g.snake().occupies(apple));
    }

    #[test]
    fn test_wall_ends_game() {
        let mut g = game();
        g.apple = Some(Point::new(20, 20));
        g.on_key(KeyEvent::press(Key::Up));
        let events = g.update();
        assert_eq!(events, vec![GameEvent::GameOver { score: 0 }]);
        assert!(g.status().is_over());
        assert!(!g.has_won());
    }

    #[test]
    fn test_right_wall() {
        let mut g = game();
        g.apple = Some(Point::new(0, 20));
        run(&mut g, 23);
        assert_eq!(g.status(), GameStatus::Running);
        g.update();
        assert!(g.status().is_over());
    }

    #[test]
    fn test_self_collision() {
        let mut g = game();
        g.apple = Some(Point::new(20, 20));
        // unstack the body along the top row
        run(&mut g, 8);
        g.on_key(KeyEvent::press(Key::Down));
        g.update();
        g.on_key(KeyEvent::press(Key::Left));
        g.update();
        g.on_key(KeyEvent::press(Key::Up));
        g.update();
        assert!(g.status().is_over());
    }

    #[test]
    fn test_quick_double_turn_cannot_reverse() {
        let mut g = game();
        g.apple = Some(Point::new(20, 20));
        run(&mut g, 5);
        g.on_key(KeyEvent::press(Key::Down));
        g.on_key(KeyEvent::press(Key::Left));
        g.update();
        assert_eq!(g.snake().head(), Point::new(5, 1));
        assert_eq!(g.status(), GameStatus::Running);
    }

    #[test]
    fn test_filling_the_board_wins() {
        let config = SnakeConfig {
            board_width: 75,
            board_height: 25,
            initial_parts: 2,
            ..SnakeConfig::default()
        };
        let mut g = SnakeGame::new(config, GameRng::new(1));
        g.apple = Some(Point::new(1, 0));
        g.update();
        assert_eq!(g.snake().len(), 3);
        // the only free cell left
        assert_eq!(g.apple(), Some(Point::new(2, 0)));

        let events = g.update();
        assert!(events.contains(&GameEvent::GameOver { score: 2 }));
        assert!(g.has_won());

        let mut frame = Frame::new(75, 25, Color::BLACK);
        g.view(&mut frame);
        assert!(frame.texts().any(|t| t == "You Win"));
    }

    #[test]
    fn test_restart() {
        let mut g = game();
        g.on_key(KeyEvent::press(Key::Up));
        g.update();
        assert!(g.status().is_over());
        assert!(g.on_key(KeyEvent::press(Key::Down)).is_empty());

        assert_eq!(
            g.on_key(KeyEvent::press(Key::Char('R'))),
            vec![GameEvent::Restarted]
        );
        assert_eq!(g.status(), GameStatus::Running);
        assert_eq!(g.snake().len(), 6);
        assert_eq!(g.snake().heading(), Direction::Right);
        assert_eq!(g.score(), 0);
        assert!(g.apple().is_some());
    }

    #[test]
    fn test_view_running() {
        let mut g = game();
        g.apple = Some(Point::new(4, 4));
        g.update();
        let mut frame = Frame::new(600, 600, Color::WHITE);
        g.view(&mut frame);

        let lines = frame
            .cmds()
            .iter()
            .filter(|c| matches!(c, DrawCmd::Line { .. }))
            .count();
        assert_eq!(lines, 48);
        assert!(frame.cmds().contains(&DrawCmd::FillOval {
            rect: Rect::new(100, 100, 25, 25),
            color: Color::RED,
        }));
        assert!(frame.cmds().contains(&DrawCmd::FillRect {
            rect: Rect::new(0, 0, 25, 25),
            color: BODY_COLOR,
        }));
        assert!(frame.cmds().contains(&DrawCmd::FillRect {
            rect: Rect::new(25, 0, 25, 25),
            color: Color::GREEN,
        }));
        assert_eq!(frame.texts().collect::<Vec<_>>(), vec!["Score: 0"]);
    }

    #[test]
    fn test_view_game_over() {
        let mut g = game();
        g.apples_eaten = 4;
        g.status = GameStatus::GameOver;
        let mut frame = Frame::new(600, 600, Color::BLACK);
        g.view(&mut frame);
        assert_eq!(
            frame.texts().collect::<Vec<_>>(),
            vec!["Score: 4", "Game Over", "Press R to Restart"]
        );
    }
}
