use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use train_domain::domain_event::{DomainEvent, EventEnvelope, TrainEvent};
use train_domain::entity::Entity;
use train_domain::error::TrainError;
use train_domain::eventing::{
    ConsoleNotifier, EventBus, EventHandler, HandledEventType, InMemoryEventBus,
};
use train_domain::part::{Locomotive, Wagon};
use train_domain::train::Train;
use train_domain::value_object::{LocomotiveKind, WagonKind};

fn locomotive(pulling_force: f64) -> Locomotive {
    Locomotive::builder()
        .weight(10.0)
        .length(10.0)
        .max_persons_count(0)
        .max_goods_weight(0.0)
        .kind(LocomotiveKind::Diesel)
        .pulling_force(pulling_force)
        .build()
}

fn freight_wagon() -> Wagon {
    Wagon::builder()
        .weight(10.0)
        .length(10.0)
        .max_persons_count(0)
        .max_goods_weight(0.0)
        .manufacturer_name("Some Name".to_string())
        .production_year(2022)
        .kind(WagonKind::Freight)
        .build()
}

#[derive(Clone, Default)]
struct Recorder {
    seen: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl EventHandler for Recorder {
    fn handler_name(&self) -> &str {
        "recorder"
    }

    fn handled_event_type(&self) -> HandledEventType {
        HandledEventType::All
    }

    fn handle(&self, event: &EventEnvelope) -> anyhow::Result<()> {
        self.seen
            .lock()
            .unwrap()
            .push(event.payload.event_type().to_string());
        Ok(())
    }
}

#[derive(Clone, Default)]
struct StartedCounter {
    hits: Arc<AtomicUsize>,
}

impl EventHandler for StartedCounter {
    fn handler_name(&self) -> &str {
        "started-counter"
    }

    fn handled_event_type(&self) -> HandledEventType {
        HandledEventType::One("train.started".to_string())
    }

    fn handle(&self, _event: &EventEnvelope) -> anyhow::Result<()> {
        self.hits.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

struct Failing;

impl EventHandler for Failing {
    fn handler_name(&self) -> &str {
        "failing"
    }

    fn handled_event_type(&self) -> HandledEventType {
        HandledEventType::All
    }

    fn handle(&self, _event: &EventEnvelope) -> anyhow::Result<()> {
        anyhow::bail!("handler exploded")
    }
}

// 测试操作成功后记录的事件序列与载荷
#[test]
fn test_event_sequence_per_operation() {
    let cart = freight_wagon();
    let mut train = Train::new(&locomotive(1000.0)).unwrap();
    train.add_wagon(&cart, None).unwrap();
    train.start().unwrap();
    train.stop().unwrap();

    let events = train.take_events();
    let types: Vec<&str> = events.iter().map(|e| e.payload.event_type()).collect();
    assert_eq!(
        types,
        vec![
            "train.formed",
            "train.wagon_attached",
            "train.started",
            "train.stopped",
        ]
    );

    // 载荷细节：挂接位置与启动时的数值
    match &events[1].payload {
        TrainEvent::WagonAttached {
            wagon_id, position, ..
        } => {
            assert_eq!(wagon_id, cart.id());
            assert_eq!(*position, 0);
        }
        other => panic!("unexpected payload: {other:?}"),
    }
    match &events[2].payload {
        TrainEvent::Started {
            pulling_force,
            max_overall_weight,
            ..
        } => {
            assert_eq!(*pulling_force, 1000.0);
            assert_eq!(*max_overall_weight, train.max_overall_weight());
        }
        other => panic!("unexpected payload: {other:?}"),
    }
}

// 测试事件缓冲的取出语义
#[test]
fn test_take_events_drains_buffer() {
    let mut train = Train::new(&locomotive(30.0)).unwrap();

    let events = train.take_events();
    assert_eq!(events.len(), 1);
    assert!(train.pending_events().is_empty());
    assert!(train.take_events().is_empty());
}

// 测试失败的操作不记录事件
#[test]
fn test_failed_operation_records_nothing() {
    let mut train = Train::new(&locomotive(1.0)).unwrap();

    assert!(matches!(
        train.stop().unwrap_err(),
        TrainError::AlreadyStopped
    ));
    assert!(matches!(
        train.start().unwrap_err(),
        TrainError::LackPullingForce { .. }
    ));

    let events = train.take_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].payload.event_type(), "train.formed");
}

// 测试元数据：事件归属列车与发生时间
#[test]
fn test_metadata_stamps_origin() {
    let mut train = Train::new(&locomotive(30.0)).unwrap();
    let events = train.take_events();

    let metadata = &events[0].metadata;
    assert_eq!(metadata.train_id(), train.id());
    assert!(*metadata.occurred_at() <= Utc::now());
}

// 测试总线按订阅类型过滤分发
#[test]
fn test_bus_filters_by_handled_type() {
    let recorder = Recorder::default();
    let counter = StartedCounter::default();

    let bus = InMemoryEventBus::new();
    bus.subscribe(Arc::new(recorder.clone()));
    bus.subscribe(Arc::new(counter.clone()));

    let mut train = Train::new(&locomotive(1000.0)).unwrap();
    train.start().unwrap();
    train.stop().unwrap();

    bus.publish_batch(&train.take_events()).unwrap();

    assert_eq!(
        recorder.seen(),
        vec!["train.formed", "train.started", "train.stopped"]
    );
    assert_eq!(counter.hits.load(Ordering::Relaxed), 1);
}

// 测试处理器失败即中止分发并上抛
#[test]
fn test_failing_handler_aborts_dispatch() {
    let recorder = Recorder::default();

    let bus = InMemoryEventBus::new();
    bus.subscribe(Arc::new(Failing));
    bus.subscribe(Arc::new(recorder.clone()));

    let mut train = Train::new(&locomotive(30.0)).unwrap();
    let err = bus.publish_batch(&train.take_events()).unwrap_err();
    assert!(err.to_string().contains("handler exploded"));

    // 注册在失败者之后的处理器未被调用
    assert!(recorder.seen().is_empty());
}

// 测试控制台通知器的订阅面
#[test]
fn test_console_notifier_subscription() {
    let notifier = ConsoleNotifier;
    assert_eq!(notifier.handler_name(), "console-notifier");
    assert!(notifier.handled_event_type().matches("train.started"));
    assert!(notifier.handled_event_type().matches("train.stopped"));
    assert!(!notifier.handled_event_type().matches("train.formed"));

    let bus = InMemoryEventBus::new();
    bus.subscribe(Arc::new(ConsoleNotifier));

    let mut train = Train::new(&locomotive(1000.0)).unwrap();
    train.start().unwrap();
    bus.publish_batch(&train.take_events()).unwrap();
}
