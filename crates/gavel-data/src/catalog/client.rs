use super::t;
use gavel_core::catalog::{ApiSource, Catalog, Section, TypeCategory as C};

/// The Client API type catalog: the bidder-facing GraphQL surface with
/// real-time subscriptions, payments, and search.
#[must_use]
pub fn client_catalog() -> Catalog {
    Catalog::new(
        ApiSource::Client,
        vec![
            core_query(),
            sales(),
            items(),
            bidding(),
            user(),
            payments(),
            search(),
            live(),
        ],
    )
}

fn core_query() -> Section {
    Section::new(
        "Core Query",
        "core-query",
        "Entry points and shared query primitives",
        vec![
            t("Account", C::Object, "Account information accessible to clients")
                .with_fields(["id", "name", "description", "handle", "imageUrl"]),
            t("Me", C::Object, "Current authenticated user's profile and data")
                .with_fields(["id", "email", "name", "address", "paddle", "bids"]),
            t("ServerTime", C::Object, "Server timestamp for client synchronization")
                .with_fields(["timestamp", "timezone", "offset"]),
            t("Node", C::Interface, "Base interface for all graph nodes with ID field")
                .with_fields(["id"]),
            t("PageInfo", C::Object, "Pagination cursor information for connections")
                .with_fields(["hasNextPage", "hasPreviousPage", "startCursor", "endCursor"]),
            t("PaginationDirection", C::Enum, "Direction for pagination: FORWARD or BACKWARD"),
            t("Permission", C::Enum, "User permission levels: READ, WRITE, BID, ADMIN"),
            t("RenderMode", C::Enum, "UI rendering modes: FULL, EMBEDDED, MINIMAL"),
        ],
    )
}

fn sales() -> Section {
    Section::new(
        "Sales",
        "sales",
        "Auction events visible to bidders",
        vec![
            t("Sale", C::Object, "Auction/sale event visible to bidders")
                .with_fields(["id", "title", "description", "status", "dates", "items"]),
            t("SaleConnection", C::Connection, "Paginated list of sales with cursor-based pagination")
                .with_fields(["edges", "pageInfo", "totalCount"]),
            t("SaleDates", C::Object, "Sale timing: open, close, and publish dates")
                .with_fields(["openDate", "closeDate", "publishDate", "timezone"]),
            t("SaleFilter", C::Input, "Filter sales by status, type, and date range")
                .with_fields(["status", "type", "dateFrom", "dateTo", "accountId"]),
            t("SaleStatus", C::Enum, "Sale lifecycle states: DRAFT, PUBLISHED, OPEN, CLOSING, CLOSED"),
            t("SaleChanged", C::Subscription, "Real-time subscription for sale status updates")
                .with_fields(["id", "status", "closingTime", "activeItems"]),
            t("UserSaleRegistration", C::Object, "User's registration details for a specific sale")
                .with_fields(["id", "sale", "status", "paddle", "registeredAt"]),
            t("SequenceNumber", C::Object, "Sale sequence number for ordering")
                .with_fields(["prefix", "number", "formatted"]),
        ],
    )
}

fn items() -> Section {
    Section::new(
        "Items",
        "items",
        "Lots with bidding details",
        vec![
            t("Item", C::Object, "Auction item/lot with bidding details")
                .with_fields(["id", "title", "description", "currentBid", "bidCount", "status"]),
            t("ItemsConnection", C::Connection, "Paginated items with cursor-based navigation")
                .with_fields(["edges", "pageInfo", "totalCount"]),
            t("ItemDates", C::Object, "Item-specific open and closing times")
                .with_fields(["openDate", "closeDate", "extendedTo"]),
            t("ItemIdsFilter", C::Input, "Filter items by specific ID list")
                .with_fields(["ids", "excludeIds"]),
            t("ItemOrderField", C::Enum, "Sort field: LOT_NUMBER, CURRENT_BID, BID_COUNT, CLOSING_TIME"),
            t("ItemOrderInput", C::Input, "Sort configuration for items")
                .with_fields(["field", "direction"]),
            t("ItemChanged", C::Subscription, "Real-time subscription for item bid/status updates")
                .with_fields(["id", "currentBid", "bidCount", "status", "leadingBidderId"]),
        ],
    )
}

fn bidding() -> Section {
    Section::new(
        "Bidding",
        "bidding",
        "Placing bids and tracking activity",
        vec![
            t("Bid", C::Object, "Individual bid record with amount and status")
                .with_fields(["id", "amount", "bidder", "timestamp", "status"]),
            t("BidPlaced", C::Union, "Result union of bid placement: Success or Error"),
            t("BidPlacedSuccess", C::Object, "Successful bid response with bid details")
                .with_fields(["bid", "isLeading", "message"]),
            t("BidPlacedError", C::Object, "Failed bid with error code and message")
                .with_fields(["errorCode", "message", "minimumBid", "currentBid"]),
            t("BidErrorCode", C::Enum, "Error codes: OUTBID, CLOSED, BELOW_MINIMUM, NOT_REGISTERED"),
            t("BidStatus", C::Enum, "Bid states: WINNING, OUTBID, CANCELLED, RETRACTED"),
            t("MaxBidPlaced", C::Union, "Result of max/proxy bid placement"),
            t("UserBid", C::Object, "User's bid with item context")
                .with_fields(["id", "bid", "item", "sale", "status", "isLeading"]),
            t("UserBidsConnection", C::Connection, "Paginated list of user's bids")
                .with_fields(["edges", "pageInfo", "totalCount"]),
            t("PlaceBidInput", C::Input, "Input for placing a bid on an item")
                .with_fields(["itemId", "amount", "maxBid"]),
            t("PlaceMaxBidInput", C::Input, "Input for placing a maximum/proxy bid")
                .with_fields(["itemId", "maxAmount"]),
            t("Paddle", C::Object, "Bidding paddle assignment for user")
                .with_fields(["id", "number", "type", "user", "sale"]),
            t("BiddingActivity", C::Subscription, "Real-time subscription for bidding activity")
                .with_fields(["itemId", "bid", "bidCount", "leading"]),
        ],
    )
}

fn user() -> Section {
    Section::new(
        "User",
        "user",
        "Profile, identity, and notifications",
        vec![
            t("UserProfile", C::Object, "User profile information")
                .with_fields(["id", "email", "firstName", "lastName", "phone", "address"]),
            t("UpdateUserInput", C::Input, "Input for updating user profile")
                .with_fields(["firstName", "lastName", "phone", "address"]),
            t("MailingAddress", C::Object, "User's mailing address")
                .with_fields(["line1", "line2", "city", "state", "postalCode", "country"]),
            t("Card", C::Object, "Saved payment card (masked)")
                .with_fields(["id", "last4", "brand", "expiryMonth", "expiryYear", "isDefault"]),
            t("UserAccountSubscription", C::Subscription, "Real-time subscription for user account changes")
                .with_fields(["id", "balance", "notifications", "registrations"]),
            t("UserSaleItemSubscription", C::Subscription, "Real-time subscription for watched items")
                .with_fields(["itemId", "currentBid", "status", "isLeading"]),
            t("UserNotification", C::Object, "User notification object")
                .with_fields(["id", "type", "message", "read", "createdAt"]),
            t("NotificationType", C::Enum, "Notification types: OUTBID, WON, REGISTRATION, PAYMENT"),
            t("UserPreferences", C::Object, "User notification and display preferences")
                .with_fields(["emailNotifications", "pushNotifications", "currency", "timezone"]),
        ],
    )
}

fn payments() -> Section {
    Section::new(
        "Payments",
        "payments",
        "Checkout sessions and invoices",
        vec![
            t("PaymentDetails", C::Object, "Payment configuration for account")
                .with_fields(["currency", "acceptedMethods", "stripeEnabled"]),
            t("PaymentMethod", C::Object, "Saved payment method")
                .with_fields(["id", "type", "last4", "brand", "isDefault"]),
            t("PaymentSession", C::Object, "Active checkout/payment session")
                .with_fields(["id", "status", "amount", "items", "expiresAt"]),
            t("PaymentSessionInput", C::Input, "Input for creating payment session")
                .with_fields(["itemIds", "paymentMethodId", "returnUrl"]),
            t("PaymentSessionStatus", C::Enum, "Session states: PENDING, PROCESSING, COMPLETE, FAILED, EXPIRED"),
            t("PaymentIntent", C::Object, "Payment intent for processing")
                .with_fields(["id", "amount", "status", "clientSecret"]),
            t("Invoice", C::Object, "Invoice for won items")
                .with_fields(["id", "number", "items", "subtotal", "fees", "total", "dueDate"]),
            t("InvoiceItem", C::Object, "Line item on invoice")
                .with_fields(["id", "item", "hammerPrice", "buyerPremium", "total"]),
            t("CheckoutResult", C::Union, "Result of checkout: Success or Error"),
            t("CheckoutSuccess", C::Object, "Successful checkout result")
                .with_fields(["order", "receipt", "confirmationNumber"]),
        ],
    )
}

fn search() -> Section {
    Section::new(
        "Search",
        "search",
        "Full-text search and faceted discovery",
        vec![
            t("SearchResultConnection", C::Connection, "Paginated search results")
                .with_fields(["edges", "pageInfo", "totalCount", "facets"]),
            t("SearchResultEdge", C::Edge, "Search result node with cursor")
                .with_fields(["node", "cursor", "score"]),
            t("SearchResultItem", C::Object, "Individual search result with relevance")
                .with_fields(["item", "sale", "highlights", "score"]),
            t("SearchType", C::Enum, "Search scope: ITEMS, SALES, ALL"),
            t("FacetCount", C::Object, "Facet with result count")
                .with_fields(["name", "count", "selected"]),
            t("FacetValue", C::Object, "Individual facet option value")
                .with_fields(["value", "count", "selected"]),
            t("SearchInput", C::Input, "Search query and filter parameters")
                .with_fields(["query", "type", "filters", "sort", "facets"]),
        ],
    )
}

fn live() -> Section {
    Section::new(
        "Live",
        "live",
        "Live streams and auctioneer state",
        vec![
            t("LiveStream", C::Object, "Live stream information for sale")
                .with_fields(["id", "url", "type", "status", "startedAt"]),
            t("LiveStreamType", C::Enum, "Stream platform: PLATFORM, YOUTUBE, VIMEO, EXTERNAL"),
            t("PlatformLiveStream", C::Object, "Platform-hosted live stream")
                .with_fields(["streamKey", "playbackUrl", "chatEnabled"]),
            t("ExternalLiveStream", C::Object, "Third-party embedded stream")
                .with_fields(["url", "embedCode", "provider"]),
            t("LiveAuctionState", C::Object, "Current state of live auction")
                .with_fields(["currentItem", "nextItems", "activeBidders"]),
            t("LiveStreamStatus", C::Enum, "Stream states: SCHEDULED, LIVE, PAUSED, ENDED"),
            t("AuctioneerMessage", C::Object, "Message from auctioneer to bidders")
                .with_fields(["id", "message", "type", "timestamp"]),
        ],
    )
}
