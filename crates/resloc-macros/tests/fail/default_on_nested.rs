// Defaults belong on text members, not on nested resources
use resloc::LocalizedResource;

struct Footer {
    copyright: String,
}

#[derive(LocalizedResource)]
struct Page {
    #[resource(nested, default = "Footer")]
    footer: Footer,
}

fn main() {}
