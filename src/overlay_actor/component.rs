use super::{OverlayRequest, OverlaySignal};
use crate::api::CartApi;
use crate::auth::AuthProvider;
use crate::dom::{Dom, NodeId};
use crate::model::{CartSnapshot, OverlayState};
use crate::util::{format_amount, format_currency};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};
use ui_runtime::{Component, Mailbox};

pub const OVERLAY_CLASS: &str = "cart-overlay";
pub const ACTIVE_CLASS: &str = "active";
pub const LOAD_ERROR: &str = "Error loading cart";
pub const SIGN_IN_MESSAGE: &str = "Please sign in to view your cart";
pub const EMPTY_MESSAGE: &str = "Your cart is empty";

pub struct OverlayContext {
    pub dom: Arc<dyn Dom>,
    pub api: Arc<dyn CartApi>,
    pub auth: Arc<dyn AuthProvider>,
}

/// The nodes the overlay writes into after the shell is mounted. The host wires
/// `.cart-overlay-close` and `.cart-overlay-backdrop` clicks to `close()`.
#[derive(Debug, Clone, Copy)]
struct Shell {
    root: NodeId,
    body: NodeId,
    total: NodeId,
}

/// Slide-in panel listing the cart contents.
///
/// Closing bumps the fetch generation, so a response that arrives after `close()` (or after
/// a newer `open`) is dropped instead of repainting a panel the user already dismissed.
pub struct CartOverlay {
    currency: String,
    state: watch::Sender<OverlayState>,
    shell: Option<Shell>,
    generation: u64,
}

impl CartOverlay {
    pub fn new(currency: impl Into<String>) -> Self {
        let (state, _) = watch::channel(OverlayState::Closed);
        Self {
            currency: currency.into(),
            state,
            shell: None,
            generation: 0,
        }
    }

    fn current(&self) -> OverlayState {
        *self.state.borrow()
    }

    fn transition(&mut self, next: OverlayState) {
        let previous = self.state.send_replace(next);
        if previous != next {
            debug!(from = %previous, to = %next, "Overlay state changed");
        }
    }

    fn mount_shell(&mut self, dom: &dyn Dom) -> Shell {
        if let Some(shell) = self.shell {
            return shell;
        }
        let root = dom.element("div", &[OVERLAY_CLASS]);
        let backdrop = dom.element("div", &["cart-overlay-backdrop"]);
        dom.append_child(root, backdrop);

        let content = dom.element("div", &["cart-overlay-content"]);
        let header = dom.element("div", &["cart-overlay-header"]);
        dom.append_text_element(header, "h2", &[], "Your Cart");
        let close = dom.append_text_element(header, "button", &["cart-overlay-close"], "×");
        dom.set_attribute(close, "aria-label", "Close cart");
        dom.append_child(content, header);

        let body = dom.element("div", &["cart-overlay-body"]);
        dom.append_child(content, body);

        let footer = dom.element("div", &["cart-overlay-footer"]);
        let total_row = dom.element("div", &["cart-overlay-total"]);
        dom.append_text_element(total_row, "span", &[], "Total:");
        let total = dom.append_text_element(
            total_row,
            "span",
            &["cart-overlay-total-amount"],
            &format_currency(0.0, &self.currency),
        );
        dom.append_child(footer, total_row);
        let link = dom.append_text_element(footer, "a", &["btn", "btn-primary"], "View Full Cart");
        dom.set_attribute(link, "href", "/cart");
        dom.append_child(content, footer);

        dom.append_child(root, content);
        dom.append_child(dom.body(), root);

        let shell = Shell { root, body, total };
        self.shell = Some(shell);
        shell
    }

    fn open(&mut self, force: bool, ctx: &OverlayContext, mailbox: &Mailbox<OverlaySignal>) {
        if self.current().is_open() && !force {
            debug!(state = %self.current(), "Overlay already open");
            return;
        }
        let dom = ctx.dom.as_ref();

        self.transition(OverlayState::Opening);
        let shell = self.mount_shell(dom);
        dom.add_class(shell.root, ACTIVE_CLASS);
        dom.set_style(dom.body(), "overflow", "hidden");

        dom.clear_children(shell.body);
        let spinner = dom.element("div", &["spinner", "spinner-md"]);
        dom.append_child(shell.body, spinner);
        self.transition(OverlayState::Loading);

        // A new open supersedes whatever fetch is still out.
        self.generation += 1;
        if !ctx.auth.current().is_authenticated() {
            info!("Overlay opened without a session");
            self.render_message(dom, SIGN_IN_MESSAGE);
            self.transition(OverlayState::Error);
            return;
        }

        let generation = self.generation;
        let api = ctx.api.clone();
        mailbox.spawn(async move {
            let result = api.fetch_cart().await.map_err(|e| e.to_string());
            OverlaySignal::Fetched { generation, result }
        });
        debug!(generation, "Loading cart");
    }

    fn close(&mut self, dom: &dyn Dom) {
        self.generation += 1;
        if let Some(shell) = self.shell {
            dom.remove_class(shell.root, ACTIVE_CLASS);
        }
        dom.remove_style(dom.body(), "overflow");
        self.transition(OverlayState::Closed);
    }

    fn render_message(&self, dom: &dyn Dom, message: &str) {
        let Some(shell) = self.shell else { return };
        dom.clear_children(shell.body);
        dom.append_text_element(shell.body, "p", &["text-center", "text-gray-600"], message);
    }

    fn render_cart(&self, dom: &dyn Dom, cart: &CartSnapshot) {
        let Some(shell) = self.shell else { return };
        dom.clear_children(shell.body);

        if cart.is_empty() {
            let empty = dom.element("div", &["empty-state"]);
            dom.append_text_element(empty, "div", &["empty-state-icon"], "🛒");
            dom.append_text_element(empty, "p", &["empty-state-description"], EMPTY_MESSAGE);
            dom.append_child(shell.body, empty);
            dom.set_text(shell.total, &format_currency(0.0, &self.currency));
            return;
        }

        for line in &cart.items {
            let row = dom.element("div", &["cart-overlay-item"]);
            let info = dom.element("div", &["cart-overlay-item-info"]);
            dom.append_text_element(info, "h4", &[], &line.menu_item_name);
            let unit = format!("{} × {}", format_amount(line.price, &self.currency), line.quantity);
            dom.append_text_element(info, "p", &[], &unit);
            dom.append_child(row, info);
            dom.append_text_element(
                row,
                "div",
                &["cart-overlay-item-total"],
                &format_currency(line.subtotal(), &self.currency),
            );
            dom.append_child(shell.body, row);
        }

        let total = match cart.total_amount {
            Some(amount) => format_amount(amount, &self.currency),
            None => format_currency(cart.computed_total(), &self.currency),
        };
        dom.set_text(shell.total, &total);
    }
}

#[async_trait]
impl Component for CartOverlay {
    type Request = OverlayRequest;
    type Signal = OverlaySignal;
    type Context = OverlayContext;

    async fn handle_request(
        &mut self,
        request: OverlayRequest,
        ctx: &OverlayContext,
        mailbox: &Mailbox<OverlaySignal>,
    ) {
        match request {
            OverlayRequest::Open { force, respond_to } => {
                self.open(force, ctx, mailbox);
                let _ = respond_to.send(self.current());
            }
            OverlayRequest::Close { respond_to } => {
                self.close(ctx.dom.as_ref());
                let _ = respond_to.send(self.current());
            }
            OverlayRequest::Toggle { respond_to } => {
                if self.current().is_open() {
                    self.close(ctx.dom.as_ref());
                } else {
                    self.open(false, ctx, mailbox);
                }
                let _ = respond_to.send(self.current());
            }
            OverlayRequest::Reload { respond_to } => {
                if self.current().is_open() {
                    self.open(true, ctx, mailbox);
                }
                let _ = respond_to.send(self.current());
            }
            OverlayRequest::State { respond_to } => {
                let _ = respond_to.send(self.current());
            }
            OverlayRequest::Subscribe { respond_to } => {
                let _ = respond_to.send(self.state.subscribe());
            }
        }
    }

    async fn handle_signal(
        &mut self,
        signal: OverlaySignal,
        ctx: &OverlayContext,
        _mailbox: &Mailbox<OverlaySignal>,
    ) {
        let OverlaySignal::Fetched { generation, result } = signal;
        if generation != self.generation {
            debug!(generation, current = self.generation, "Discarding stale cart response");
            return;
        }
        let dom = ctx.dom.as_ref();
        match result {
            Ok(cart) => {
                self.render_cart(dom, &cart);
                info!(lines = cart.items.len(), "Cart loaded");
                self.transition(OverlayState::Loaded);
            }
            Err(reason) => {
                warn!(%reason, "Error loading cart");
                self.render_message(dom, LOAD_ERROR);
                self.transition(OverlayState::Error);
            }
        }
    }

    async fn on_unmount(&mut self, ctx: &OverlayContext) {
        if let Some(shell) = self.shell.take() {
            ctx.dom.remove(shell.root);
        }
        ctx.dom.remove_style(ctx.dom.body(), "overflow");
    }
}
