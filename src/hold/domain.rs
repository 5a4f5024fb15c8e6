pub mod model;
pub mod waiting_line;

pub(crate) use waiting_line::WaitingLines;
