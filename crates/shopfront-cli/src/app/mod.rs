//! Interactive storefront shell.
//!
//! Owns the router, the mounted page and the client. Fetches run on the
//! tokio runtime and come back as `Completion`s through the renderer's
//! channel; each is handed to the page that is mounted when it arrives.

mod input;

pub use input::{Action, InputMode, action_for};

use crossterm::event::KeyEvent;
use shopfront_engine::{
    Applied, ControllerId, DetailController, DetailDisplay, FetchFailure, FetchOutcome,
    FetchTicket, HomeEffect, HomePage, ListingController, Route, Router,
};
use shopfront_runtime::Shopfront;
use shopfront_types::CategoryFilter;
use std::sync::mpsc::Sender;
use tokio::runtime::Handle;

use crate::presentation::presenters::{
    present_detail_screen, present_home, present_listing, present_screen,
};
use crate::presentation::renderers::{TuiApp, TuiEvent};
use crate::presentation::view_models::{PageViewModel, ScreenViewModel};

/// A finished fetch on its way back to the page that asked for it
#[derive(Debug)]
pub struct Completion {
    pub ticket: FetchTicket,
    pub result: Result<FetchOutcome, FetchFailure>,
}

#[derive(Debug)]
struct ListingPage {
    controller: ListingController,
    selected: usize,
    search_focused: bool,
}

#[derive(Debug)]
enum Page {
    Home(HomePage),
    Listing(ListingPage),
    Detail(DetailController),
}

pub struct App {
    router: Router,
    shopfront: Shopfront,
    page: Page,
    next_controller: u64,
    handle: Handle,
    tx: Sender<TuiEvent<Completion>>,
    should_quit: bool,
}

impl App {
    pub fn new(
        shopfront: Shopfront,
        initial: Route,
        handle: Handle,
        tx: Sender<TuiEvent<Completion>>,
    ) -> Self {
        let mut app = Self {
            router: Router::new(initial),
            shopfront,
            page: Page::Home(HomePage::new()),
            next_controller: 0,
            handle,
            tx,
            should_quit: false,
        };
        app.mount_current();
        app
    }

    pub fn route(&self) -> &Route {
        self.router.current()
    }

    pub fn shopfront(&self) -> &Shopfront {
        &self.shopfront
    }

    pub fn input_mode(&self) -> InputMode {
        match &self.page {
            Page::Home(home) => InputMode::Home {
                modal_open: home.is_modal_open(),
            },
            Page::Listing(listing) => InputMode::Listing {
                search_focused: listing.search_focused,
            },
            Page::Detail(_) => InputMode::Detail,
        }
    }

    /// Replace the mounted page with a fresh one for the current route.
    /// Whatever the old page had in flight is dropped when it completes.
    fn mount_current(&mut self) {
        let id = self.allocate_id();
        let route = self.router.current().clone();
        tracing::debug!(route = %route, controller = %id, "mounting page");

        self.page = match &route {
            Route::Home => Page::Home(HomePage::new()),
            Route::Products | Route::List => {
                let mode = route.listing_mode().unwrap_or(shopfront_engine::ListingMode::Grid);
                let mut controller = ListingController::new(id, mode);
                let ticket = controller.mount();
                self.dispatch(ticket);
                Page::Listing(ListingPage {
                    controller,
                    selected: 0,
                    search_focused: self.router.take_scroll_to_search(),
                })
            }
            Route::Detail(raw_id) => {
                let mut controller = DetailController::new(id, raw_id.clone());
                if let Some(ticket) = controller.mount() {
                    self.dispatch(ticket);
                }
                Page::Detail(controller)
            }
        };
    }

    fn allocate_id(&mut self) -> ControllerId {
        self.next_controller += 1;
        ControllerId::new(self.next_controller)
    }

    fn dispatch(&self, ticket: FetchTicket) {
        tracing::debug!(controller = %ticket.controller, request = %ticket.request, "dispatching fetch");
        let service = self.shopfront.service().clone();
        let tx = self.tx.clone();
        let request = ticket.request.clone();
        let fetch = self
            .handle
            .spawn(async move { service.execute(&request).await });
        self.handle.spawn(async move {
            let event = match fetch.await {
                Ok(result) => TuiEvent::Completed(Completion { ticket, result }),
                Err(err) => {
                    tracing::error!(request = %ticket.request, error = %err, "fetch task failed");
                    TuiEvent::Error(format!("Fetch task for {} failed: {}", ticket.request, err))
                }
            };
            if tx.send(event).is_err() {
                tracing::debug!("renderer gone; dropping completion");
            }
        });
    }

    fn navigate(&mut self, route: Route) {
        if self.router.current() == &route {
            return;
        }
        self.router.navigate(route);
        self.mount_current();
    }

    fn toggle_theme(&mut self) {
        let theme = self.shopfront.preferences_mut().toggle_theme();
        tracing::info!(%theme, "theme toggled");
    }

    pub fn perform(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleTheme => self.toggle_theme(),
            Action::Navigate(route) => self.navigate(route),
            Action::Back => {
                if self.router.back() {
                    self.mount_current();
                }
            }
            other => self.perform_on_page(other),
        }
    }

    fn perform_on_page(&mut self, action: Action) {
        let mut follow_up = None;
        let mut tickets = Vec::new();

        match &mut self.page {
            Page::Home(home) => match action {
                Action::HomeNext => home.select_next(),
                Action::HomePrevious => home.select_previous(),
                Action::CloseModal => home.close_modal(),
                Action::HomeActivate => match home.activate() {
                    HomeEffect::Navigate { route, state } => {
                        follow_up = Some(PageFollowUp::NavigateWith(route, state))
                    }
                    HomeEffect::ToggleTheme => follow_up = Some(PageFollowUp::ToggleTheme),
                    HomeEffect::None => {}
                },
                _ => {}
            },
            Page::Listing(listing) => match action {
                Action::FocusSearch => listing.search_focused = true,
                Action::BlurSearch => listing.search_focused = false,
                Action::QueryPush(c) => {
                    listing.controller.push_query_char(c);
                    listing.selected = 0;
                }
                Action::QueryPop => {
                    listing.controller.pop_query_char();
                    listing.selected = 0;
                }
                Action::SelectNext => {
                    let count = listing.controller.visible_products().len();
                    if listing.selected + 1 < count {
                        listing.selected += 1;
                    }
                }
                Action::SelectPrevious => listing.selected = listing.selected.saturating_sub(1),
                Action::OpenSelected => {
                    if let Some(product) = listing.controller.visible_products().get(listing.selected)
                    {
                        follow_up = Some(PageFollowUp::Navigate(Route::Detail(
                            product.id.to_string(),
                        )));
                    }
                }
                Action::NextCategory | Action::PreviousCategory => {
                    let forward = action == Action::NextCategory;
                    let next = cycle_category(&listing.controller, forward);
                    if let Some(ticket) = listing.controller.select_category(next) {
                        listing.selected = 0;
                        tickets.push(ticket);
                    }
                }
                Action::Retry => tickets.extend(listing.controller.retry()),
                _ => {}
            },
            Page::Detail(detail) => match action {
                Action::ToggleFavorite => {
                    if let (Some(id), DetailDisplay::Ready(_)) =
                        (detail.product_id(), detail.display())
                    {
                        follow_up = Some(PageFollowUp::ToggleFavorite(id));
                    }
                }
                Action::Retry => match detail.retry() {
                    Some(ticket) => tickets.push(ticket),
                    // Nothing to re-request for an unparseable id
                    None if detail.phase().is_failed() => {
                        follow_up = Some(PageFollowUp::Navigate(Route::Products))
                    }
                    None => {}
                },
                _ => {}
            },
        }

        for ticket in tickets {
            self.dispatch(ticket);
        }

        match follow_up {
            Some(PageFollowUp::Navigate(route)) => self.navigate(route),
            Some(PageFollowUp::NavigateWith(route, state)) => {
                self.router.navigate_with(route, state);
                self.mount_current();
            }
            Some(PageFollowUp::ToggleTheme) => self.toggle_theme(),
            Some(PageFollowUp::ToggleFavorite(id)) => {
                let favorite = self.shopfront.preferences_mut().toggle_favorite(id);
                tracing::info!(product = %id, favorite, "favorite toggled");
            }
            None => {}
        }
    }

    /// Hand a completion to the mounted page
    pub fn apply(&mut self, completion: Completion) -> Applied {
        let Completion { ticket, result } = completion;
        let applied = match &mut self.page {
            Page::Listing(listing) => listing.controller.apply(&ticket, result),
            Page::Detail(detail) => detail.apply(&ticket, result),
            Page::Home(_) => Applied::Stale,
        };
        if applied == Applied::Stale {
            tracing::debug!(controller = %ticket.controller, request = %ticket.request, "completion discarded");
        }
        applied
    }

    pub fn build_screen(&self) -> ScreenViewModel {
        let page = match &self.page {
            Page::Home(home) => PageViewModel::Home(present_home(home)),
            Page::Listing(listing) => PageViewModel::Listing(present_listing(
                &listing.controller,
                listing.selected,
                listing.search_focused,
            )),
            Page::Detail(detail) => {
                let favorite = detail
                    .product_id()
                    .is_some_and(|id| self.shopfront.preferences().is_favorite(id));
                PageViewModel::Detail(present_detail_screen(detail, favorite))
            }
        };

        present_screen(
            self.router.current(),
            self.shopfront.preferences().theme(),
            page,
            input::hints(self.input_mode()),
        )
    }
}

enum PageFollowUp {
    Navigate(Route),
    NavigateWith(Route, shopfront_engine::NavigationState),
    ToggleTheme,
    ToggleFavorite(shopfront_types::ProductId),
}

/// Next (or previous) entry of the category menu, `All` first
fn cycle_category(controller: &ListingController, forward: bool) -> CategoryFilter {
    let mut menu = vec![CategoryFilter::All];
    menu.extend(
        controller
            .categories()
            .iter()
            .cloned()
            .map(CategoryFilter::Only),
    );

    let current = menu
        .iter()
        .position(|f| f == &controller.filter().category)
        .unwrap_or(0);
    let next = if forward {
        (current + 1) % menu.len()
    } else {
        (current + menu.len() - 1) % menu.len()
    };
    menu.swap_remove(next)
}

impl TuiApp for App {
    type Completion = Completion;

    fn screen(&self) -> ScreenViewModel {
        self.build_screen()
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = action_for(key, self.input_mode()) {
            self.perform(action);
        }
    }

    fn complete(&mut self, completion: Completion) {
        self.apply(completion);
    }

    fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests;
