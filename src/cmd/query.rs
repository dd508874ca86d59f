use audiothek::{build_query, ApiKind};

pub fn cmd_query(kind: ApiKind, arg: &str) {
    println!("{}", build_query(kind, arg));
}
