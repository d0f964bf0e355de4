use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chain-cli")]
#[command(about = "Operator CLI for the ping-pong relay and control server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a chain by pinging a relay node (normally ordinal 0)
    Start {
        #[arg(short, long, default_value = "http://localhost:8080")]
        node: String,

        /// Initial message. Ordinal 0 replaces it with the seed anyway.
        #[arg(short, long, default_value = "")]
        message: String,
    },
    /// Press the control server's shutdown button
    Shutdown {
        #[arg(short, long, default_value = "http://localhost:80")]
        server: String,
    },
    /// Fetch the control server's page
    Page {
        #[arg(short, long, default_value = "http://localhost:80")]
        server: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Start { node, message } => {
            let res = client
                .post(format!("{}/ping", node.trim_end_matches('/')))
                .header(reqwest::header::CONTENT_TYPE, "text/plain")
                .body(message)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Shutdown { server } => {
            let res = client
                .post(format!("{}/shutdown", server.trim_end_matches('/')))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Page { server } => {
            let res = client.get(server).send().await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        eprintln!("Response: {}", text);
        return Ok(());
    }

    println!("{}", text.trim_end());
    Ok(())
}
