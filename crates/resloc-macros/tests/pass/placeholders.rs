// Named placeholder sources
use resloc::{Arg, Placeholders, format};

#[derive(Placeholders)]
struct Invoice {
    #[placeholder(rename = "Customer")]
    customer: String,
    total: f64,
    #[placeholder(skip)]
    internal_id: u64,
}

fn main() {
    let invoice = Invoice {
        customer: "Ada".to_string(),
        total: 12.5,
        internal_id: 7,
    };
    assert_eq!(invoice.placeholder("Customer").as_deref(), Some("Ada"));
    assert_eq!(invoice.placeholder("internal_id"), None);
    assert_eq!(invoice.internal_id, 7);
    assert_eq!(
        format("{Customer} owes {total}", &[Arg::object(&invoice)]),
        "Ada owes 12.5"
    );
}
