use train_domain::entity::Entity;
use train_domain::part::{Locomotive, Wagon};
use train_domain::train::Train;
use train_domain::value_object::{LocomotiveKind, WagonKind};

fn locomotive(weight: f64, persons: usize, goods: f64, pulling_force: f64) -> Locomotive {
    Locomotive::builder()
        .weight(weight)
        .length(10.0)
        .max_persons_count(persons)
        .max_goods_weight(goods)
        .kind(LocomotiveKind::Diesel)
        .pulling_force(pulling_force)
        .build()
}

fn wagon(weight: f64, persons: usize, goods: f64) -> Wagon {
    Wagon::builder()
        .weight(weight)
        .length(10.0)
        .max_persons_count(persons)
        .max_goods_weight(goods)
        .manufacturer_name("Some Name".to_string())
        .production_year(2022)
        .kind(WagonKind::Passenger)
        .build()
}

// 测试自重、长度、载客与载货对全部部件求和
#[test]
fn test_sums_over_all_parts() {
    let mut train = Train::new(&locomotive(10.0, 0, 10.0, 30.0)).unwrap();
    train.add_wagon(&wagon(10.0, 0, 10.0), None).unwrap();

    assert_eq!(train.empty_weight(), 20.0);
    assert_eq!(train.length(), 20.0);
    assert_eq!(train.max_persons_count(), 0);
    assert_eq!(train.max_goods_weight(), 20.0);
}

// 测试列车员配备的边界：每 50 名乘客一名，向上取整
#[test]
fn test_conductors_count_boundaries() {
    let cases = [(0, 0), (49, 1), (50, 1), (51, 2), (100, 2)];
    for (persons, expected) in cases {
        let mut train = Train::new(&locomotive(10.0, 0, 0.0, 30.0)).unwrap();
        train.add_wagon(&wagon(10.0, persons, 0.0), None).unwrap();
        assert_eq!(
            train.conductors_count(),
            expected,
            "persons={persons} 应配备 {expected} 名列车员"
        );
    }
}

// 测试满载载荷与满载总重
#[test]
fn test_max_payload_and_overall_weight() {
    // 乘客 3 人、列车员 1 人、货物 30、空重 20：
    // payload = (3 + 1) × 75 + 30 = 330，overall = 330 + 20 = 350
    let mut train = Train::new(&locomotive(10.0, 1, 10.0, 1000.0)).unwrap();
    train.add_wagon(&wagon(10.0, 2, 20.0), None).unwrap();

    assert_eq!(train.max_payload(), 330.0);
    assert_eq!(train.max_overall_weight(), 350.0);

    // 更重的车厢只影响空重与总重，载荷不变
    let mut heavier = Train::new(&locomotive(10.0, 1, 10.0, 1000.0)).unwrap();
    heavier.add_wagon(&wagon(20.0, 2, 20.0), None).unwrap();

    assert_eq!(heavier.max_payload(), 330.0);
    assert_eq!(heavier.max_overall_weight(), 360.0);
}

// 测试牵引力对全部机车求和
#[test]
fn test_pulling_force_sums_over_locomotives() {
    let mut train = Train::new(&locomotive(10.0, 0, 10.0, 30.0)).unwrap();
    train
        .add_locomotive(&locomotive(10.0, 0, 10.0, 45.0), None)
        .unwrap();

    assert_eq!(train.pulling_force(), 75.0);
}

// 测试派生属性在编组变化后即时重算
#[test]
fn test_recomputed_after_composition_change() {
    let cart = wagon(10.0, 50, 10.0);
    let mut train = Train::new(&locomotive(10.0, 0, 10.0, 30.0)).unwrap();

    train.add_wagon(&cart, None).unwrap();
    assert_eq!(train.empty_weight(), 20.0);
    assert_eq!(train.max_persons_count(), 50);
    assert_eq!(train.conductors_count(), 1);

    train.remove_wagon(&cart).unwrap();
    assert_eq!(train.empty_weight(), 10.0);
    assert_eq!(train.max_persons_count(), 0);
    assert_eq!(train.conductors_count(), 0);
}

// 测试启动门槛：牵引力恰好等于满载总重时允许启动
#[test]
fn test_start_threshold_is_inclusive() {
    // 空重 10、无乘客无货物：overall = 10，牵引力恰好 10
    let mut train = Train::new(&locomotive(10.0, 0, 0.0, 10.0)).unwrap();
    assert_eq!(train.max_overall_weight(), 10.0);
    train.start().unwrap();
}

// 测试部件描述文本及其顺序
#[test]
fn test_part_descriptions() {
    let loco = locomotive(10.0, 0, 10.0, 30.0);
    let cart = wagon(10.0, 0, 10.0);
    let mut train = Train::new(&loco).unwrap();
    train.add_wagon(&cart, None).unwrap();

    let descriptions = train.part_descriptions();
    assert_eq!(
        descriptions,
        vec![
            format!("Locomotive №{}", loco.id()),
            format!("Wagon №{}", cart.id()),
        ]
    );
}
