//! Главный модуль приложения Craps на Linera.
//!
//! Здесь описываем ABI (Operation / Message / Query / Response) и
//! связываем contract/service с нашим API (`api::Command` / `api::Query`).

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;

use linera_sdk::linera_base_types::{ContractAbi, ServiceAbi};
use serde::{Deserialize, Serialize};

use crate::api::{Command, Query, QueryResponse};

/// Операции (внешние команды), которые модуль принимает.
///
/// Для простоты: одна операция = одна команда из api::Command.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum CrapsOperation {
    Command(Command),
}

/// Сообщения между приложениями Linera.
/// Один игрок, один стол – сообщения не нужны.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum CrapsMessage {}

/// Запросы к сервису (read-only).
pub type CrapsQuery = Query;

/// Ответы на запросы.
pub type CrapsResponse = QueryResponse;

/// ABI для контракта и сервиса.
#[derive(Clone, Debug)]
pub struct CrapsAbi;

impl ContractAbi for CrapsAbi {
    type Operation = CrapsOperation;
    type Response = ();
}

impl ServiceAbi for CrapsAbi {
    type Query = CrapsQuery;
    type QueryResponse = CrapsResponse;
}
