use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub enum Query {
    #[command(about = "Classify a set of cards at the current level", alias = "cls")]
    Classify {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
        #[arg(long, help = "Print the classification as JSON")]
        json: bool,
    },
    #[command(
        about = "Check whether a challenger beats an incumbent, e.g. compare 9d,9c 6s,6h",
        alias = "cmp"
    )]
    Compare {
        #[arg(required = true)]
        challenger: String,
        #[arg(required = true)]
        incumbent: String,
    },
    #[command(
        about = "Validate a play against an optional play on the table",
        alias = "val"
    )]
    Validate {
        #[arg(required = true)]
        play: String,
        #[arg(long, help = "Cards currently on the table")]
        table: Option<String>,
        #[arg(long, help = "Cards held by the player, to check the play comes from them")]
        hand: Option<String>,
    },
    #[command(about = "Deal four hands from a fresh pack")]
    Deal,
    #[command(about = "Show or set the level being climbed", alias = "lvl")]
    Level {
        rank: Option<String>,
    },
}
