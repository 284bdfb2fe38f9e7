/// 列车编组示例
/// 展示部件构造、编组变更、派生属性与启动/停止的完整流程
use train_domain::domain_event::DomainEvent;
use train_domain::entity::Entity;
use train_domain::part::{Locomotive, Wagon};
use train_domain::train::Train;
use train_domain::value_object::{LocomotiveKind, WagonKind};

fn main() -> anyhow::Result<()> {
    // ============================================================================
    // 构造部件（句柄可自由克隆，克隆共享同一实体）
    // ============================================================================
    let locomotive = Locomotive::builder()
        .weight(10.0)
        .length(10.0)
        .max_persons_count(1)
        .max_goods_weight(10.0)
        .kind(LocomotiveKind::Electrical)
        .pulling_force(5000.0)
        .build();

    let sleeping_wagon = Wagon::builder()
        .weight(10.0)
        .length(10.0)
        .max_persons_count(36)
        .max_goods_weight(10.0)
        .manufacturer_name("Tver Carriage Works".to_string())
        .production_year(2019)
        .kind(WagonKind::Sleeping)
        .build();

    let restaurant_wagon = Wagon::builder()
        .weight(10.0)
        .length(10.0)
        .max_persons_count(0)
        .max_goods_weight(10.0)
        .manufacturer_name("Tver Carriage Works".to_string())
        .production_year(2021)
        .kind(WagonKind::Restaurant)
        .build();

    // ============================================================================
    // 编组
    // ============================================================================
    let mut train = Train::new(&locomotive)?;
    println!("✅ 列车已创建: №{}", train.id());

    train.add_wagon(&sleeping_wagon, None)?;
    // 位置 0 落在车厢序列内：餐车插到卧铺车前
    train.add_wagon(&restaurant_wagon, Some(0))?;
    println!("✅ 已挂接 {} 节车厢", train.wagons().len());

    for description in train.part_descriptions() {
        println!("  - {description}");
    }

    // ============================================================================
    // 派生属性（每次访问基于当前编组即时重算）
    // ============================================================================
    println!("\n=== 派生属性 ===");
    println!("空载自重: {}", train.empty_weight());
    println!("列车长度: {}", train.length());
    println!(
        "可载乘客: {}（需配列车员 {} 名）",
        train.max_persons_count(),
        train.conductors_count()
    );
    println!("可载货物: {}", train.max_goods_weight());
    println!("满载总重: {}", train.max_overall_weight());
    println!("牵引合计: {}", train.pulling_force());

    // ============================================================================
    // 启动 / 行驶中保护 / 停止
    // ============================================================================
    train.start()?;
    println!("\n✅ 列车已启动");

    let extra_wagon = Wagon::builder()
        .weight(10.0)
        .length(10.0)
        .max_persons_count(0)
        .max_goods_weight(10.0)
        .manufacturer_name("Tver Carriage Works".to_string())
        .production_year(2022)
        .kind(WagonKind::Freight)
        .build();
    match train.add_wagon(&extra_wagon, None) {
        Err(err) => println!("✅ 行驶中挂接被拒绝: {err}"),
        Ok(()) => unreachable!("moving train must reject composition changes"),
    }

    train.stop()?;
    println!("✅ 列车已停止");

    // ============================================================================
    // 事件流水
    // ============================================================================
    println!("\n=== 事件流水 ===");
    for event in train.take_events() {
        println!(
            "  {} @ {}",
            event.payload.event_type(),
            event.metadata.occurred_at()
        );
    }

    Ok(())
}
