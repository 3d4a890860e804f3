// A flat resource type keyed by module path and type name
use resloc::{LocalizedResource, ResourceDescriptor};

#[derive(Default, LocalizedResource)]
struct Greetings {
    hello: String,
    goodbye: String,
}

fn main() {
    let descriptor: &'static ResourceDescriptor = Greetings::descriptor();
    assert_eq!(descriptor.type_name, "Greetings");
    assert_eq!(descriptor.key_prefix, None);
    assert_eq!(descriptor.members.len(), 2);
    assert_eq!(descriptor.members[0].segment, "hello");
    assert_eq!(descriptor.owner_path().last(), Some(&"Greetings"));
}
