// Self-referencing resources through a collection
use resloc::LocalizedResource;

#[derive(Default, LocalizedResource)]
#[resource(key_prefix = "Menu")]
struct MenuItem {
    label: String,
    #[resource(collection)]
    children: Vec<MenuItem>,
}

#[derive(Default, LocalizedResource)]
struct Empty {
    #[resource(hidden)]
    counter: usize,
}

fn main() {
    let descriptor = MenuItem::descriptor();
    let child = descriptor.members[1].kind.child().unwrap();
    assert!(std::ptr::eq(descriptor, child));
    assert_eq!(Empty::descriptor().members.len(), 1);
    assert_eq!(Empty::default().counter, 0);
}
