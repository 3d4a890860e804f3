// Misspelled attributes suggest the closest known name
use resloc::LocalizedResource;

#[derive(LocalizedResource)]
struct Invoice {
    #[resource(renam = "Total")]
    total: String,
}

fn main() {}
