//! 列车领域的属性宏
//!
//! 供 `train-domain` 及其测试使用的三个宏：
//! - `#[entity_id]`：单字段 tuple struct 的标识包装（派生合并 + 常用转换实现）；
//! - `#[value_object]`：值对象的默认派生合并；
//! - `#[event]`：领域事件枚举（注入事件 id 字段，生成 `DomainEvent` 实现）。

mod entity_id;
mod event;
mod utils;
mod value_object;

use proc_macro::TokenStream;

/// 标识包装宏，如 `#[entity_id] pub struct PartId(Uuid);`
///
/// 合并派生（Default/Clone/Debug/serde/PartialEq/Eq/Hash），
/// 并生成 `new`、`Display`、`FromStr`、`AsRef`/`AsMut` 与双向 `From`。
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}

/// 值对象宏：为结构体或枚举合并默认派生；
/// `#[value_object(debug = false)]` 可关闭 Debug 派生。
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}

/// 领域事件宏：要求所有变体为具名字段形式，为缺失者注入 `id` 字段，
/// 并生成 `::train_domain::domain_event::DomainEvent` 实现；
/// 变体可用 `#[event(event_type = "...")]` 覆写事件类型。
#[proc_macro_attribute]
pub fn event(attr: TokenStream, item: TokenStream) -> TokenStream {
    event::expand(attr, item)
}
