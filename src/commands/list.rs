use anyhow::Result;
use calnotes_core::HttpClient;
use calnotes_core::screens::HomeScreen;
use calnotes_core::screens::home::LOADING;
use chrono::NaiveDate;

use crate::render::Render;
use crate::utils::tui;

pub async fn run(client: &HttpClient, date: NaiveDate) -> Result<()> {
    let mut home = HomeScreen::new(date);
    tui::with_spinner(LOADING, home.refresh(client)).await;

    if let Some(error) = home.error() {
        anyhow::bail!("{}", error);
    }

    println!("{}", home.render());
    Ok(())
}
