// Nested resources and collections of resources
use resloc::{LocalizedResource, MemberKind};

#[derive(Default, LocalizedResource)]
struct Header {
    title: String,
}

#[derive(Default, LocalizedResource)]
struct Tile {
    caption: String,
}

#[derive(Default, LocalizedResource)]
#[resource(key_prefix = "Home")]
struct Home {
    #[resource(nested)]
    header: Header,
    #[resource(collection)]
    tiles: Vec<Tile>,
    #[resource(collection)]
    banner: Option<Tile>,
}

fn main() {
    let descriptor = Home::descriptor();
    assert!(matches!(descriptor.members[0].kind, MemberKind::Nested(_)));
    assert!(matches!(descriptor.members[1].kind, MemberKind::Collection(_)));
    assert_eq!(
        descriptor.members[1].kind.child().map(|child| child.type_name),
        Some("Tile")
    );
    assert_eq!(descriptor.members[2].kind.child().map(|c| c.members.len()), Some(1));
}
