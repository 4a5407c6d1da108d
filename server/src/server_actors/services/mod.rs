pub mod dispatch_board;
pub mod order_intake;
