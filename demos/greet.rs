use flagbind::{Flag, FlagSet, ParseBehavior};

fn main() {
    let mut name: String = String::default();
    let mut times: u8 = 0;
    let mut shout: bool = false;
    let mut tags: Vec<String> = Vec::default();

    let mut flags = FlagSet::new();
    Flag::string("name", "world")
        .alias("n")
        .to_unchecked(&mut flags, &mut name);
    Flag::u8("times", 1)
        .alias("t")
        .to_unchecked(&mut flags, &mut times);
    Flag::bool("shout", false).to_unchecked(&mut flags, &mut shout);
    Flag::string_slice("tag", vec![]).to_unchecked(&mut flags, &mut tags);

    let tokens: Vec<String> = std::env::args().skip(1).collect();
    let remaining = match flags.parse_with(&tokens, &[ParseBehavior::Strict]) {
        Ok(remaining) => remaining,
        Err(errors) => {
            eprintln!("Parse error:\n{errors}");
            std::process::exit(1);
        }
    };
    drop(flags);

    let mut greeting = format!("Hello, {name}!");

    if shout {
        greeting = greeting.to_uppercase();
    }

    for _ in 0..times {
        println!("{greeting}");
    }

    if !tags.is_empty() {
        println!("Tags: {t}", t = tags.join(", "));
    }

    if !remaining.is_empty() {
        println!("Remaining: {r:?}", r = remaining);
    }
}
