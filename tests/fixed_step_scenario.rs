use toroid_snake::board::Board;
use toroid_snake::food::Food;
use toroid_snake::game::{Game, GameStatus};
use toroid_snake::input::Direction;
use toroid_snake::snake::Snake;
use toroid_snake::vec2::Vec2;

#[test]
fn stepwise_food_collection_and_growth() {
    let mut game = Game::new_with_seed(Board::new(20), 42);
    game.food = Food::at(Vec2::new(6.0, 3.0));

    // First step: the head reaches the food cell.
    game.step();
    assert_eq!(game.status, GameStatus::Running);
    assert_eq!(game.score, 1);
    let body: Vec<Vec2> = game.snake.segments().collect();
    assert_eq!(
        body,
        vec![Vec2::new(6.0, 3.0), Vec2::new(5.0, 3.0), Vec2::new(4.0, 3.0)]
    );
    assert!(!game.snake.occupies(game.food.position));

    // Second step: queued growth lands, the previous tail is retained.
    game.step();
    assert_eq!(game.snake.len(), 4);
    assert!(game.snake.occupies(Vec2::new(4.0, 3.0)));
    assert_eq!(game.snake.head(), Vec2::new(7.0, 3.0));
}

#[test]
fn wrap_then_reversal_rejection_then_self_collision() {
    let mut game = Game::new_with_seed(Board::new(20), 7);
    game.food = Food::at(Vec2::new(0.0, 0.0));
    game.snake = Snake::from_segments(
        vec![
            Vec2::new(19.0, 3.0),
            Vec2::new(18.0, 3.0),
            Vec2::new(17.0, 3.0),
            Vec2::new(16.0, 3.0),
            Vec2::new(15.0, 3.0),
        ],
        Direction::Right,
    );

    // The head crosses the right edge and reappears at x = 0.
    game.step();
    assert_eq!(game.snake.head(), Vec2::new(0.0, 3.0));
    assert_eq!(game.status, GameStatus::Running);

    // A reversal request is ignored; the snake keeps moving right.
    game.request_direction(Direction::Left);
    game.step();
    assert_eq!(game.snake.head(), Vec2::new(1.0, 3.0));
    assert_eq!(game.snake.direction(), Vec2::new(1.0, 0.0));

    // Curl back into the body: up, left, down lands on a body cell.
    game.request_direction(Direction::Up);
    game.step();
    game.request_direction(Direction::Left);
    game.step();
    game.request_direction(Direction::Down);
    game.step();

    assert_eq!(game.status, GameStatus::GameOver);
    assert_eq!(game.final_score(), Some(0));
}
