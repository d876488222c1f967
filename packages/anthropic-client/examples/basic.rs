//! Basic Anthropic client usage example

use anthropic_client::{AnthropicClient, Message, MessagesRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize from environment
    let client = AnthropicClient::from_env()?;

    println!("=== Message Completion ===");
    let response = client
        .create_message(
            MessagesRequest::new("claude-sonnet-4-5-20250929")
                .system("You are a helpful assistant.")
                .message(Message::user("What is Rust in one sentence?"))
                .max_tokens(200),
        )
        .await?;

    println!("Response: {}", response.text());
    println!(
        "Tokens: {} in / {} out",
        response.usage.input_tokens, response.usage.output_tokens
    );

    Ok(())
}
