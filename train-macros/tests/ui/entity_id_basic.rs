use train_macros::entity_id;
use uuid::Uuid;

#[entity_id]
struct SignalId(Uuid);

fn main() {
    let id = SignalId::new(Uuid::new_v4());
    let _ = format!("{:?}", id); // 默认派生 Debug，应可用

    // Display 与 FromStr 往返
    let shown = id.to_string();
    let parsed: SignalId = shown.parse().expect("parses back from display form");
    assert_eq!(parsed, id);

    // 双向 From 与 AsRef
    let raw: Uuid = (&id).into();
    let back = SignalId::from(raw);
    assert_eq!(back, id);
    let _: &Uuid = id.as_ref();
}
