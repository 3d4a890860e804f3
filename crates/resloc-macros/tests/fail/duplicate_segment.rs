// A rename cannot collide with another member's segment
use resloc::LocalizedResource;

#[derive(LocalizedResource)]
struct Dialog {
    #[resource(rename = "title")]
    heading: String,
    title: String,
}

fn main() {}
