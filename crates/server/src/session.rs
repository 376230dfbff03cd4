// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory session state.
//!
//! Billing drafts, carts, wishlists, shopper profiles, and order history
//! live only here, for the lifetime of the server process. Nothing in
//! this module is persisted; each session owns its state and is the only
//! mutator of it.

use pahana_shop::{OrderDraft, OrderHistory, Wishlist};
use pahana_shop_api::generate_session_token;
use pahana_shop_domain::{CompletedOrder, ContactSnapshot, StorefrontPage, WorkflowProfile};
use std::collections::HashMap;

/// One storefront shopper session: cart, wishlist, profile, order
/// history, and the page currently shown.
pub struct ShopSession {
    /// The shopping cart draft.
    pub cart: OrderDraft,
    /// The wishlist.
    pub wishlist: Wishlist,
    /// The shopper's own completed orders, newest first.
    pub history: OrderHistory,
    /// The shopper profile recorded on checkouts.
    pub profile: ContactSnapshot,
    /// The storefront page the session is on.
    pub page: StorefrontPage,
}

impl ShopSession {
    fn new() -> Self {
        Self {
            cart: OrderDraft::new(WorkflowProfile::STOREFRONT_CART),
            wishlist: Wishlist::new(),
            history: OrderHistory::new(),
            profile: ContactSnapshot {
                name: String::from("Guest Shopper"),
                email: String::from("guest@pahanabookshop.com"),
                phone: String::new(),
                address: String::new(),
                account_number: None,
            },
            page: StorefrontPage::Home,
        }
    }
}

/// The registry of live sessions plus the server-wide completed-order
/// ledger feeding the dashboard.
#[derive(Default)]
pub struct SessionRegistry {
    billing: HashMap<String, OrderDraft>,
    shop: HashMap<String, ShopSession>,
    ledger: OrderHistory,
}

impl SessionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new admin billing session and returns its token.
    pub fn start_billing(&mut self) -> String {
        let token: String = generate_session_token();
        self.billing
            .insert(token.clone(), OrderDraft::new(WorkflowProfile::ADMIN_BILLING));
        token
    }

    /// Returns a billing draft by token.
    #[must_use]
    pub fn billing(&self, token: &str) -> Option<&OrderDraft> {
        self.billing.get(token)
    }

    /// Returns a mutable billing draft by token.
    pub fn billing_mut(&mut self, token: &str) -> Option<&mut OrderDraft> {
        self.billing.get_mut(token)
    }

    /// Starts a new storefront session and returns its token.
    pub fn start_shop(&mut self) -> String {
        let token: String = generate_session_token();
        self.shop.insert(token.clone(), ShopSession::new());
        token
    }

    /// Returns a storefront session by token.
    #[must_use]
    pub fn shop(&self, token: &str) -> Option<&ShopSession> {
        self.shop.get(token)
    }

    /// Returns a mutable storefront session by token.
    pub fn shop_mut(&mut self, token: &str) -> Option<&mut ShopSession> {
        self.shop.get_mut(token)
    }

    /// Records a completed order on the server-wide ledger.
    pub fn record_completed(&mut self, order: CompletedOrder) {
        self.ledger.record(order);
    }

    /// Returns the server-wide completed-order ledger.
    #[must_use]
    pub const fn ledger(&self) -> &OrderHistory {
        &self.ledger
    }
}
