// src/scrape/browser.rs
// Headless Chromium behind the blocking `ResultSource` contract.
//
// One browser, one tab, used strictly in sequence. chromiumoxide is async, so
// the source owns a current-thread runtime and blocks on every call; the CDP
// handler task only runs while we are inside `block_on`, which is all we need.

use std::time::{Duration, Instant};

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::element::Element;
use chromiumoxide::error::CdpError;
use chromiumoxide::page::Page;
use futures::StreamExt;
use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinHandle;

use crate::config::ScrapeOptions;
use crate::config::consts::{POLL_MS, SCROLL_PAUSE_MS};

use super::{ResultSource, SourceError};

const SEARCH_INPUT: &str = "#search-input";
const RESULT_ITEMS: &str = "ul.results-list > li";

const CLEAR_SEARCH: &str = "(() => { const i = document.getElementById('search-input'); if (i) { i.value = ''; } })()";

const SCROLL_TO_NEXT: &str = r#"(() => {
    const b = Array.from(document.querySelectorAll('button.btn.btn-link'))
        .find(el => el.textContent.includes('›'));
    if (b) { b.scrollIntoView(); }
    return !!b;
})()"#;

const CLICK_NEXT: &str = r#"(() => {
    const b = Array.from(document.querySelectorAll('button.btn.btn-link'))
        .find(el => el.textContent.includes('›'));
    if (!b || b.disabled || b.classList.contains('disabled')) { return false; }
    b.click();
    return true;
})()"#;

pub struct BrowserSource {
    rt: Runtime,
    browser: Option<Browser>,
    page: Page,
    handler: JoinHandle<()>,
    opts: ScrapeOptions,
}

fn launch_err(e: CdpError) -> SourceError {
    SourceError::Launch(e.to_string())
}

fn browser_err(e: CdpError) -> SourceError {
    SourceError::Browser(e.to_string())
}

async fn wait_for(page: &Page, selector: &str, wait: Duration, what: &'static str) -> Result<Element, SourceError> {
    let deadline = Instant::now() + wait;
    loop {
        if let Ok(el) = page.find_element(selector).await {
            return Ok(el);
        }
        if Instant::now() >= deadline {
            return Err(SourceError::Timeout(what));
        }
        tokio::time::sleep(Duration::from_millis(POLL_MS)).await;
    }
}

impl BrowserSource {
    /// Start Chromium. Failure here is fatal for the run.
    pub fn launch(opts: ScrapeOptions) -> Result<Self, SourceError> {
        let rt = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| SourceError::Launch(e.to_string()))?;

        let mut builder = BrowserConfig::builder();
        if !opts.headless {
            builder = builder.with_head();
        }
        let config = builder.build().map_err(SourceError::Launch)?;

        let (browser, handler, page) = rt.block_on(async {
            let (browser, mut events) = Browser::launch(config).await.map_err(launch_err)?;
            let handler = tokio::spawn(async move {
                while let Some(event) = events.next().await {
                    if event.is_err() {
                        break;
                    }
                }
            });
            let page = browser.new_page("about:blank").await.map_err(launch_err)?;
            Ok::<_, SourceError>((browser, handler, page))
        })?;

        Ok(Self { rt, browser: Some(browser), page, handler, opts })
    }

    /// Close the browser and wait for the process to exit.
    pub fn close(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if let Some(mut browser) = self.browser.take() {
            self.rt.block_on(async {
                let _ = browser.close().await;
                let _ = browser.wait().await;
            });
            self.handler.abort();
        }
    }
}

impl Drop for BrowserSource {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl ResultSource for BrowserSource {
    fn search(&mut self, term: &str) -> Result<(), SourceError> {
        let page = &self.page;
        let opts = &self.opts;
        self.rt.block_on(async {
            page.goto(opts.url.clone()).await.map_err(browser_err)?;
            let input = wait_for(page, SEARCH_INPUT, opts.search_wait, "search input").await?;
            page.evaluate(CLEAR_SEARCH).await.map_err(browser_err)?;
            input.click().await.map_err(browser_err)?;
            input.type_str(term).await.map_err(browser_err)?;
            input.press_key("Enter").await.map_err(browser_err)?;
            tokio::time::sleep(opts.settle).await;
            Ok::<_, SourceError>(())
        })
    }

    fn page_html(&mut self) -> Result<String, SourceError> {
        let page = &self.page;
        let opts = &self.opts;
        self.rt.block_on(async {
            wait_for(page, RESULT_ITEMS, opts.results_wait, "results").await?;
            page.content().await.map_err(browser_err)
        })
    }

    fn advance(&mut self) -> Result<(), SourceError> {
        let page = &self.page;
        let opts = &self.opts;
        self.rt.block_on(async {
            let found = page
                .evaluate(SCROLL_TO_NEXT)
                .await
                .map_err(browser_err)?
                .into_value::<bool>()
                .map_err(|e| SourceError::Browser(e.to_string()))?;
            if !found {
                return Err(SourceError::NoNextPage);
            }
            tokio::time::sleep(Duration::from_millis(SCROLL_PAUSE_MS)).await;

            let clicked = page
                .evaluate(CLICK_NEXT)
                .await
                .map_err(browser_err)?
                .into_value::<bool>()
                .map_err(|e| SourceError::Browser(e.to_string()))?;
            if !clicked {
                return Err(SourceError::NoNextPage);
            }
            tokio::time::sleep(opts.page_settle).await;
            Ok(())
        })
    }
}
