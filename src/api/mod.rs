//! Внешний API движка крэпса.
//!
//! Здесь описываются:
//! - команды (commands.rs) - всё, что меняет состояние (ставка, бросок, сброс);
//! - запросы (queries.rs) - только чтение;
//! - DTO (dto.rs) - удобные структуры для фронта;
//! - ошибки (errors.rs) - то, что видит клиент;
//! - обработчик (handler.rs) - применение команд/запросов к `CrapsSession`.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod handler;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use handler::*;
pub use queries::*;
