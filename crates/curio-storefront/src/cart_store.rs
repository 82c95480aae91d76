//! The cart for a browsing session.

use tracing::{debug, warn};

use curio_commerce::cart::{compute_summary, CartLineItem, CartSummary, Coupon, CouponValidator};
use curio_commerce::catalog::Product;
use curio_commerce::checkout::CheckoutFlow;
use curio_commerce::error::StorefrontError;
use curio_commerce::ids::{LineItemId, ProductId};
use curio_commerce::money::Currency;
use curio_storage::SessionStore;

const CART_KEY: &str = "cart";

/// Owns the cart line items and enforces stock bounds on every mutation.
///
/// Each successful mutation recomputes the summary and writes the line
/// items through to durable storage. The write is best-effort: a storage
/// fault is logged and the mutation still succeeds, so a full quota or a
/// blocked backend never breaks the cart itself.
pub struct CartStore {
    items: Vec<CartLineItem>,
    coupon: Option<Coupon>,
    summary: CartSummary,
    validator: CouponValidator,
    storage: SessionStore,
}

impl CartStore {
    pub fn new(storage: SessionStore) -> Self {
        Self::with_validator(storage, CouponValidator::with_defaults())
    }

    pub fn with_validator(storage: SessionStore, validator: CouponValidator) -> Self {
        CartStore {
            items: Vec::new(),
            coupon: None,
            summary: CartSummary::empty(Currency::USD),
            validator,
            storage,
        }
    }

    /// Restore persisted line items, if durable storage can be reached
    /// in this execution context. Returns whether hydration ran.
    ///
    /// Skipping when the backend is unavailable keeps a pre-render pass
    /// from clobbering state that only the interactive pass can see.
    pub fn hydrate(&mut self) -> bool {
        if !self.storage.is_available() {
            debug!("durable storage unavailable; skipping cart hydration");
            return false;
        }
        match self.storage.get::<Vec<CartLineItem>>(CART_KEY) {
            Ok(Some(items)) => {
                debug!(lines = items.len(), "hydrated cart from storage");
                self.items = items;
            }
            Ok(None) => {}
            Err(error) => {
                warn!(%error, "failed to read persisted cart; starting empty");
                self.items.clear();
            }
        }
        if let Err(error) = self.recompute() {
            warn!(%error, "persisted cart does not price; starting empty");
            self.items.clear();
            self.summary = CartSummary::empty(Currency::USD);
        }
        true
    }

    /// Add `quantity` of `product`, merging with an existing line item.
    ///
    /// The merged quantity may not exceed the product's recorded stock,
    /// and quantity arithmetic is checked; on any failure the cart is
    /// left unchanged.
    pub fn add_to_cart(
        &mut self,
        product: &Product,
        quantity: i64,
    ) -> Result<(), StorefrontError> {
        if quantity <= 0 {
            return Err(StorefrontError::InvalidQuantity(quantity));
        }
        let existing = self
            .items
            .iter()
            .position(|item| item.product.id == product.id);
        let merged = match existing {
            Some(index) => self.items[index]
                .quantity
                .checked_add(quantity)
                .ok_or(StorefrontError::Overflow)?,
            None => quantity,
        };
        if merged > product.stock {
            return Err(StorefrontError::OutOfStock {
                requested: merged,
                available: product.stock,
            });
        }
        match existing {
            Some(index) => {
                let previous = self.items[index].quantity;
                self.items[index].quantity = merged;
                if let Err(error) = self.recompute() {
                    self.items[index].quantity = previous;
                    return Err(error);
                }
            }
            None => {
                self.items.push(CartLineItem::new(product.clone(), merged));
                if let Err(error) = self.recompute() {
                    self.items.pop();
                    return Err(error);
                }
            }
        }
        self.commit();
        Ok(())
    }

    pub fn remove_from_cart(&mut self, item_id: &LineItemId) -> Result<(), StorefrontError> {
        let index = self
            .items
            .iter()
            .position(|item| &item.id == item_id)
            .ok_or_else(|| StorefrontError::ProductNotInCart(item_id.as_str().to_string()))?;
        let removed = self.items.remove(index);
        if let Err(error) = self.recompute() {
            self.items.insert(index, removed);
            return Err(error);
        }
        self.commit();
        Ok(())
    }

    /// Set a line item's quantity. Zero removes the item; the new
    /// quantity may not exceed the stock recorded on the line's product
    /// snapshot.
    pub fn update_quantity(
        &mut self,
        item_id: &LineItemId,
        quantity: i64,
    ) -> Result<(), StorefrontError> {
        if quantity == 0 {
            return self.remove_from_cart(item_id);
        }
        if quantity < 0 {
            return Err(StorefrontError::InvalidQuantity(quantity));
        }
        let index = self
            .items
            .iter()
            .position(|item| &item.id == item_id)
            .ok_or_else(|| StorefrontError::ProductNotInCart(item_id.as_str().to_string()))?;
        let stock = self.items[index].product.stock;
        if quantity > stock {
            return Err(StorefrontError::OutOfStock {
                requested: quantity,
                available: stock,
            });
        }
        let previous = self.items[index].quantity;
        self.items[index].quantity = quantity;
        if let Err(error) = self.recompute() {
            self.items[index].quantity = previous;
            return Err(error);
        }
        self.commit();
        Ok(())
    }

    /// Empty the cart and drop any applied coupon.
    pub fn clear_cart(&mut self) {
        self.items.clear();
        self.coupon = None;
        self.summary = CartSummary::empty(Currency::USD);
        self.commit();
    }

    /// Apply a coupon code; an empty code clears the active coupon.
    /// On a rejected code, nothing changes.
    pub fn apply_coupon(&mut self, code: &str) -> Result<Option<Coupon>, StorefrontError> {
        let applied = if code.trim().is_empty() {
            None
        } else {
            Some(self.validator.validate(code)?)
        };
        let previous = std::mem::replace(&mut self.coupon, applied.clone());
        if let Err(error) = self.recompute() {
            self.coupon = previous;
            return Err(error);
        }
        self.commit();
        Ok(applied)
    }

    pub fn is_in_cart(&self, product_id: &ProductId) -> bool {
        self.line_for_product(product_id).is_some()
    }

    /// Quantity of a product in the cart, zero when absent.
    pub fn item_quantity(&self, product_id: &ProductId) -> i64 {
        self.line_for_product(product_id)
            .map(|item| item.quantity)
            .unwrap_or(0)
    }

    pub fn line_for_product(&self, product_id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| &item.product.id == product_id)
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn summary(&self) -> &CartSummary {
        &self.summary
    }

    pub fn coupon(&self) -> Option<&Coupon> {
        self.coupon.as_ref()
    }

    /// Total units across all line items.
    pub fn item_count(&self) -> i64 {
        self.summary.item_count
    }

    /// Number of distinct line items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Start the checkout flow over the current line items.
    pub fn begin_checkout(&self) -> Result<CheckoutFlow, StorefrontError> {
        CheckoutFlow::begin(&self.items)
    }

    fn recompute(&mut self) -> Result<(), StorefrontError> {
        self.summary = compute_summary(&self.items, self.coupon.as_ref())?;
        Ok(())
    }

    fn commit(&mut self) {
        if let Err(error) = self.storage.set(CART_KEY, &self.items) {
            warn!(%error, "failed to persist cart");
        }
    }
}
