// A renamed member must still produce a valid key segment
use resloc::LocalizedResource;

#[derive(LocalizedResource)]
struct Banner {
    #[resource(rename = "call to action")]
    cta: String,
}

fn main() {}
