// Enums get one key per variant, whatever the variant shape
use resloc::{KeyBuilder, LocalizedEnum};

#[derive(LocalizedEnum)]
#[resource(key_prefix = "Orders.Status")]
enum OrderStatus {
    #[resource(default = "Pending")]
    Pending,
    #[resource(rename = "InTransit")]
    Shipped(u32),
    Delivered { signed_by: String },
}

fn main() {
    assert_eq!(OrderStatus::descriptor().variants.len(), 3);
    assert_eq!(OrderStatus::Shipped(3).variant().segment, "InTransit");

    let delivered = OrderStatus::Delivered {
        signed_by: "Ada".to_string(),
    };
    assert_eq!(
        KeyBuilder::enum_key(&delivered).unwrap().as_str(),
        "Orders.Status.Delivered"
    );
    assert_eq!(OrderStatus::Pending.variant().default_text, Some("Pending"));
}
