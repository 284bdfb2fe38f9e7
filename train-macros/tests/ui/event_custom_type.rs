use train_domain::domain_event::DomainEvent;
use train_macros::event;

#[event(id = String)]
enum DepotEvent {
    // 已显式声明 id 的变体不会重复注入
    #[event(event_type = "depot.gate_opened")]
    GateOpened { id: String, gate: u8 },
    #[event(event_type = "depot.gate_closed")]
    GateClosed { gate: u8 },
}

fn main() {
    let opened = DepotEvent::GateOpened {
        id: "evt-9".into(),
        gate: 3,
    };
    assert_eq!(opened.event_type(), "depot.gate_opened");
    assert_eq!(opened.event_id(), "evt-9");

    let closed = DepotEvent::GateClosed {
        id: "evt-10".into(),
        gate: 3,
    };
    assert_eq!(closed.event_type(), "depot.gate_closed");
}
