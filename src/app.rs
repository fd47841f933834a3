use leptos::html::Canvas;
use leptos::*;

use crate::{
    application::{ListingLoader, LoadCancellation},
    domain::{
        chart::{ChartFilter, ChartSynthesizer},
        listing::Asset,
        logging::LogComponent,
    },
    infrastructure::{
        http::CoinMarketCapClient, rendering::LineChartRenderer, services::BrowserNoise,
    },
    log_debug, log_error, log_info,
    view_state::ListingViewState,
};

const CHART_WIDTH: u32 = 560;
const CHART_HEIGHT: u32 = 300;

/// Display strings for one table row.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRowCells {
    pub name: String,
    pub symbol: String,
    pub price: String,
    pub change_24h: String,
    pub change_class: &'static str,
    pub market_cap: String,
}

impl From<&Asset> for AssetRowCells {
    fn from(asset: &Asset) -> Self {
        Self {
            name: asset.name.clone(),
            symbol: asset.symbol.clone(),
            price: asset.quote.price.to_string(),
            change_24h: asset.quote.percent_change_24h.to_string(),
            change_class: asset.quote.percent_change_24h.trend().css_class(),
            market_cap: asset.quote.market_cap.to_string(),
        }
    }
}

/// Page shell: header plus the listing view.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>{STYLES}</style>
        <Header />
        <main class="main">
            <ListingView />
        </main>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <div class="header">
            <a href="/" class="brand">"Crypto Converter"</a>
        </div>
    }
}

/// Table of listings with pagination and the detail modal.
///
/// Owns its state; the listing load is started once on mount and aborted if
/// the view is torn down first.
#[component]
pub fn ListingView() -> impl IntoView {
    let state = create_rw_signal(ListingViewState::default());

    let (cancellation, registration) = LoadCancellation::new_pair();
    on_cleanup({
        let cancellation = cancellation.clone();
        move || cancellation.cancel()
    });

    spawn_local(async move {
        let loader = ListingLoader::new(CoinMarketCapClient::default());
        let outcome = loader.load_until_cancelled(registration).await;
        if outcome.is_cancelled() || cancellation.is_cancelled() {
            return;
        }

        let assets = outcome.into_assets();
        state.update(|s| s.replace_assets(assets));
        state.with_untracked(|s| {
            log_info!(
                LogComponent::Presentation("ListingView"),
                "Showing {} assets over {} pages",
                s.assets().len(),
                s.total_pages()
            );
        });
    });

    let page_items = create_memo(move |_| state.with(|s| s.page_items().to_vec()));

    view! {
        <div class="listing-view">
            <h2 class="listing-title">"Live Cryptocurrency Prices by Market Capitalization"</h2>
            <ListingTable rows=page_items state=state />
            <PaginationControls state=state />
            <DetailModal state=state />
        </div>
    }
}

#[component]
fn ListingTable(rows: Memo<Vec<Asset>>, state: RwSignal<ListingViewState>) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <table class="listing-table">
                <thead>
                    <tr>
                        <th class="left">"Coin"</th>
                        <th class="left">"Scrip"</th>
                        <th class="right">"Current Price (USD)"</th>
                        <th class="right">"24h Change"</th>
                        <th class="right">"Market Cap"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|asset| view! { <AssetRow asset=asset state=state /> })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn AssetRow(asset: Asset, state: RwSignal<ListingViewState>) -> impl IntoView {
    let id = asset.id;
    let cells = AssetRowCells::from(&asset);
    let logo = asset.has_logo().then(|| {
        view! { <img src=asset.logo.to_string() alt=asset.name.clone() class="coin-logo" /> }
    });

    view! {
        <tr
            class="asset-row"
            on:click=move |_| {
                state.update(|s| {
                    s.select(id);
                });
            }
        >
            <td class="coin-cell">{logo}{cells.name}</td>
            <td>{cells.symbol}</td>
            <td class="right">{cells.price}</td>
            <td class=format!("right {}", cells.change_class)>{cells.change_24h}</td>
            <td class="right">{cells.market_cap}</td>
        </tr>
    }
}

#[component]
fn PaginationControls(state: RwSignal<ListingViewState>) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                class="page-btn"
                disabled=move || state.with(|s| !s.has_prev())
                on:click=move |_| {
                    state.update(|s| {
                        s.prev_page();
                    });
                }
            >
                "Prev"
            </button>
            <span class="page-label">{move || state.with(|s| s.page_label())}</span>
            <button
                class="page-btn"
                disabled=move || state.with(|s| !s.has_next())
                on:click=move |_| {
                    state.update(|s| {
                        s.next_page();
                    });
                }
            >
                "Next"
            </button>
        </div>
    }
}

/// Modal for the selected asset. Closing clears the selection only.
#[component]
fn DetailModal(state: RwSignal<ListingViewState>) -> impl IntoView {
    let selected = create_memo(move |_| state.with(|s| s.selected().cloned()));
    let filter = create_memo(move |_| state.with(|s| s.filter()));
    let close = move |_: web_sys::MouseEvent| state.update(|s| s.close_modal());

    move || {
        selected.get().map(|asset| {
            let quote = asset.quote;
            let logo = asset.has_logo().then(|| {
                view! { <img src=asset.logo.to_string() alt=asset.name.clone() class="modal-logo" /> }
            });

            view! {
                <div class="modal-backdrop" on:click=close>
                    <div class="modal" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                        <button class="modal-close" on:click=close>"✕"</button>
                        <div class="modal-header">
                            {logo}
                            <h3>{asset.title()}</h3>
                        </div>
                        <div class="stats">
                            <StatRow label="Current Price:" value=quote.price.to_string() />
                            <StatRow
                                label="24h Change:"
                                value=quote.percent_change_24h.to_string()
                                tone=quote.percent_change_24h.trend().css_class()
                            />
                            <StatRow
                                label="7d Change:"
                                value=quote.percent_change_7d.to_string()
                                tone=quote.percent_change_7d.trend().css_class()
                            />
                        </div>
                        <div class="filters">
                            <FilterButton filter=ChartFilter::Day active=filter state=state />
                            <FilterButton filter=ChartFilter::Week active=filter state=state />
                        </div>
                        <PriceChart asset=asset.clone() filter=filter />
                        <p class="chart-note">"Simulated prices around the current quote, not market history."</p>
                    </div>
                </div>
            }
        })
    }
}

#[component]
fn StatRow(
    label: &'static str,
    value: String,
    #[prop(optional)] tone: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat-row">
            <span>{label}</span>
            <span class=tone>{value}</span>
        </div>
    }
}

#[component]
fn FilterButton(
    filter: ChartFilter,
    active: Memo<ChartFilter>,
    state: RwSignal<ListingViewState>,
) -> impl IntoView {
    view! {
        <button
            class="filter-btn"
            class:active=move || active.get() == filter
            on:click=move |_| state.update(|s| s.set_filter(filter))
        >
            {filter.button_label()}
        </button>
    }
}

/// Redraws a fresh synthetic series whenever the filter changes.
#[component]
fn PriceChart(asset: Asset, filter: Memo<ChartFilter>) -> impl IntoView {
    let canvas_ref = create_node_ref::<Canvas>();
    let renderer = LineChartRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    let symbol = asset.symbol;
    let base_price = asset.quote.price.value();

    create_effect(move |_| {
        let filter = filter.get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };

        let series = ChartSynthesizer::generate(filter, &symbol, base_price, &mut BrowserNoise);
        log_debug!(
            LogComponent::Presentation("PriceChart"),
            "Drawing {} ({} points)",
            series.title,
            series.len()
        );
        if let Err(e) = renderer.render(&canvas, &series) {
            log_error!(LogComponent::Presentation("PriceChart"), "Chart render failed: {:?}", e);
        }
    });

    view! {
        <div class="chart-box">
            <canvas
                node_ref=canvas_ref
                class="price-chart"
                width=CHART_WIDTH.to_string()
                height=CHART_HEIGHT.to_string()
            />
        </div>
    }
}

const STYLES: &str = r#"
body {
    margin: 0;
    background: #111827;
    font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
    color: white;
}

.header {
    display: flex;
    justify-content: center;
    background: #1f2937;
    padding: 8px 24px;
}

.brand {
    color: #eab308;
    font-size: 30px;
    font-weight: 600;
    text-decoration: none;
}

.main {
    display: flex;
    flex-direction: column;
    min-height: 100vh;
}

.listing-view {
    display: flex;
    flex-direction: column;
    align-items: center;
    padding: 24px;
}

.listing-title {
    font-size: 28px;
    font-weight: 600;
    text-align: center;
    margin-bottom: 24px;
}

.table-wrapper {
    width: 100%;
    overflow-x: auto;
}

.listing-table {
    min-width: 600px;
    width: 100%;
    max-width: 900px;
    margin: 0 auto;
    border-collapse: collapse;
    border: 1px solid #374151;
}

.listing-table th {
    background: #374151;
    padding: 8px 16px;
    border-bottom: 1px solid #4b5563;
}

.listing-table td {
    padding: 8px 16px;
}

.left { text-align: left; }
.right { text-align: right; }

.asset-row {
    cursor: pointer;
    border-bottom: 1px solid #374151;
}

.asset-row:hover { background: #1f2937; }

.coin-cell {
    display: flex;
    align-items: center;
    gap: 8px;
}

.coin-logo { width: 20px; height: 20px; }
.modal-logo { width: 32px; height: 32px; }

.change-up { color: #4ade80; }
.change-down { color: #f87171; }

.pagination {
    display: flex;
    align-items: center;
    gap: 8px;
    margin-top: 24px;
}

.page-btn, .filter-btn {
    background: #4b5563;
    color: white;
    border: none;
    padding: 4px 12px;
    border-radius: 4px;
    cursor: pointer;
}

.page-btn { background: #2563eb; }
.page-btn:hover { background: #1d4ed8; }
.page-btn:disabled { opacity: 0.5; cursor: default; }
.filter-btn.active { background: #2563eb; }

.modal-backdrop {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.6);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 50;
    padding: 0 8px;
}

.modal {
    position: relative;
    background: #1f2937;
    padding: 24px;
    border-radius: 8px;
    width: 100%;
    max-width: 600px;
}

.modal-close {
    position: absolute;
    top: 8px;
    right: 8px;
    background: none;
    border: none;
    color: #d1d5db;
    font-size: 20px;
    cursor: pointer;
}

.modal-header {
    display: flex;
    align-items: center;
    gap: 12px;
    margin-bottom: 16px;
}

.stats { margin-bottom: 16px; }

.stat-row {
    display: flex;
    justify-content: space-between;
    margin: 8px 0;
}

.filters {
    display: flex;
    gap: 16px;
    margin-bottom: 12px;
}

.chart-box {
    background: #111827;
    padding: 8px;
    border-radius: 6px;
}

.price-chart { width: 100%; }

.chart-note {
    color: #9ca3af;
    font-size: 12px;
    margin-top: 8px;
}
"#;
