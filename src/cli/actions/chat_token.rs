use crate::chat::ChatTokenClient;
use anyhow::Result;

#[derive(Debug)]
pub struct Args {
    pub chat_url: String,
    pub user_id: String,
    pub name: Option<String>,
}

/// Fetch a chat token and print it as JSON.
/// # Errors
/// Returns an error if the token service call fails.
pub async fn execute(args: Args) -> Result<()> {
    let client = ChatTokenClient::new(&args.chat_url)?;
    let token = client
        .fetch_token(&args.user_id, args.name.as_deref())
        .await?;

    println!("{}", serde_json::to_string_pretty(&token)?);

    Ok(())
}
