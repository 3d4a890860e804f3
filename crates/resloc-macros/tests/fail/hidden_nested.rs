// Hidden members cannot also be part of the resource graph
use resloc::LocalizedResource;

struct Sidebar {
    heading: String,
}

#[derive(LocalizedResource)]
struct Layout {
    #[resource(hidden, nested)]
    sidebar: Sidebar,
}

fn main() {}
