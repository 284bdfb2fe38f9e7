use train_macros::value_object;

#[value_object]
struct Section {
    track: String,
}

#[value_object(debug = false)]
struct Opaque(i32);

#[value_object]
enum Gauge {
    #[default]
    Standard,
    Narrow,
}

fn main() {
    // Debug 默认开启，应可格式化
    let _ = format!(
        "{:?}",
        Section {
            track: "A1".into()
        }
    );

    // Default/Clone/PartialEq 可用（编译期检查足矣）
    let s = Section::default();
    let _twin = s.clone();
    let _eq = s == Section::default();

    // debug = false 时仅构造，不要求 Debug
    let _ = Opaque(1);

    // 枚举同样获得 Default/Clone/serde 等派生
    let _gauge: Gauge = Default::default();
}
