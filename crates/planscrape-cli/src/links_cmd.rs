use planscrape::{discover_pdf_links, RegisterClient, ScrapeConfig};

pub fn run(url: Option<&str>) -> Result<(), i32> {
    let config = ScrapeConfig::default();
    let url = url.unwrap_or(&config.register_url).to_string();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| {
            eprintln!("Error starting runtime: {e}");
            1
        })?;

    let links = runtime
        .block_on(async {
            let client = RegisterClient::new(&config)?;
            let html = client.fetch_index(&url).await?;
            discover_pdf_links(&html, &url)
        })
        .map_err(|e| {
            eprintln!("Error fetching {url}: {e}");
            1
        })?;

    if links.is_empty() {
        eprintln!("No PDF links found on {url}");
        return Ok(());
    }
    for link in links {
        println!("{link}");
    }
    Ok(())
}
