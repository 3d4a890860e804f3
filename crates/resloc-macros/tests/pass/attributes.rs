// Prefix, rename, default, hidden and constant members
use resloc::{LocalizedResource, member};

#[derive(Default, LocalizedResource)]
#[resource(key_prefix = "Pages.Checkout")]
#[resource(constant(name = "Version", default = "2"))]
struct Checkout {
    #[resource(rename = "PayButton", default = "Pay now")]
    pay_button: String,
    #[resource(hidden)]
    attempts: u32,
    r#type: String,
}

fn main() {
    let descriptor = Checkout::descriptor();
    assert_eq!(descriptor.owner_path(), vec!["Pages", "Checkout"]);
    assert_eq!(descriptor.members[0].segment, "PayButton");
    assert_eq!(descriptor.members[0].default_text, Some("Pay now"));
    assert!(descriptor.members[1].hidden);
    assert_eq!(descriptor.members[2].segment, "type");
    assert_eq!(descriptor.static_members[0].segment, "Version");

    let key = member!(Checkout, pay_button).key().unwrap();
    assert_eq!(key.as_str(), "Pages.Checkout.PayButton");
}
