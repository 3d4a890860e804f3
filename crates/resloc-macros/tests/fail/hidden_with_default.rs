// Hidden members are never localized, so a default is meaningless
use resloc::LocalizedResource;

#[derive(LocalizedResource)]
struct Profile {
    #[resource(hidden, default = "anonymous")]
    user_id: String,
}

fn main() {}
