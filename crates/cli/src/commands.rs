use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Drop and recreate the records table, optionally seeding it
    Init {
        #[arg(
            long,
            help = "Sample data file with resource_id|resource_type|context lines"
        )]
        sample_file: Option<String>,
    },
    /// Insert one record stamped with the current time
    Insert {
        #[arg(long, help = "Resource ID")]
        resource_id: String,

        #[arg(long, help = "Resource type")]
        resource_type: String,

        #[arg(long, help = "Optional context payload")]
        context: Option<String>,
    },
    /// Print every record, newest first
    List,
    /// Fetch one page
    Page {
        #[arg(long, default_value = "", help = "Continuation token from a previous page")]
        token: String,

        #[arg(long, help = "Rows per page (default 5, max 100)")]
        page_size: Option<String>,
    },
    /// Follow continuation tokens from the first page to the last
    Walk {
        #[arg(long, help = "Rows per page (default 5, max 100)")]
        page_size: Option<String>,

        #[arg(long, help = "Stop after this many pages")]
        max_pages: Option<usize>,
    },
    /// Test the configured connection
    TestConn,
}
