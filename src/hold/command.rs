pub mod cancel_hold_book_cmd;
pub mod queue_position_cmd;
pub mod waiting_line_cmd;
