use train_domain::domain_event::DomainEvent;
use train_macros::event;

#[event]
enum SignalEvent {
    Raised { note: String },
    Cleared {},
}

fn main() {
    // `id` 字段由宏注入
    let raised = SignalEvent::Raised {
        id: "evt-1".to_string(),
        note: "west approach".to_string(),
    };
    assert_eq!(raised.event_id(), "evt-1");
    assert_eq!(raised.event_type(), "SignalEvent.Raised");

    let cleared = SignalEvent::Cleared {
        id: "evt-2".to_string(),
    };
    assert_eq!(cleared.event_type(), "SignalEvent.Cleared");
}
