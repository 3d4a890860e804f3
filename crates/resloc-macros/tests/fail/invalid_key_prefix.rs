// A key prefix segment must be an identifier
use resloc::LocalizedResource;

#[derive(LocalizedResource)]
#[resource(key_prefix = "Pages.2nd")]
struct Settings {
    title: String,
}

fn main() {}
