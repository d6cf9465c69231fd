//! Diner Store - 餐厅订单数据存储
//!
//! # 架构概述
//!
//! Customers, orders and dishes kept in an embedded SQLite database, with a
//! CRUD layer and an analytics layer on top:
//!
//! - **数据库** (`db`): connection pool, schema bootstrap, repositories
//! - **分析** (`analytics`): spending, popularity, ratings, profit, recommendations
//! - **服务** (`services`): [`Restaurant`], mapping every outcome to a [`ReturnValue`]
//!
//! # 模块结构
//!
//! ```text
//! diner-store/src/
//! ├── core/          # 配置、环境
//! ├── db/            # 连接池、表结构、仓储
//! ├── analytics/     # 聚合查询
//! ├── services/      # Restaurant facade
//! └── utils/         # 错误、日志
//! ```

pub mod analytics;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, setup_environment};
pub use db::Database;
pub use services::Restaurant;
pub use shared::ReturnValue;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
