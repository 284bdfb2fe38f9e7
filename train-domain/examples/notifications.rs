/// 事件通知示例
/// 将聚合记录的事件经内存总线分发给控制台通知器
use std::sync::Arc;

use train_domain::eventing::{ConsoleNotifier, EventBus, InMemoryEventBus};
use train_domain::part::Locomotive;
use train_domain::train::Train;
use train_domain::value_object::LocomotiveKind;

fn main() -> anyhow::Result<()> {
    let bus = InMemoryEventBus::new();
    bus.subscribe(Arc::new(ConsoleNotifier));

    let locomotive = Locomotive::builder()
        .weight(10.0)
        .length(10.0)
        .max_persons_count(0)
        .max_goods_weight(0.0)
        .kind(LocomotiveKind::Diesel)
        .pulling_force(30.0)
        .build();

    let mut train = Train::new(&locomotive)?;
    train.start()?;
    train.stop()?;

    // 通知器只订阅启动/停止，编组事件会被滤过
    bus.publish_batch(&train.take_events())?;
    println!("✅ 通知已全部分发");

    Ok(())
}
