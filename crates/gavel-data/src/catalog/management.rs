use super::t;
use gavel_core::catalog::{ApiSource, Catalog, Section, TypeCategory as C};

/// The Management API type catalog: the operator-facing GraphQL surface,
/// grouped into the twelve sections the glossary renders.
#[must_use]
pub fn management_catalog() -> Catalog {
    Catalog::new(
        ApiSource::Management,
        vec![
            accounts(),
            sales(),
            items(),
            bids(),
            users(),
            registrations(),
            orders(),
            media(),
            webhooks(),
            config(),
            live(),
            core(),
        ],
    )
}

fn accounts() -> Section {
    Section::new(
        "Accounts",
        "accounts",
        "Account management, fees, and payment onboarding",
        vec![
            t("Account", C::Object, "Main account object containing organization details")
                .with_fields(["id", "name", "email", "status", "createdAt"]),
            t("AccountFee", C::Object, "Fee configuration for account billing")
                .with_fields(["id", "type", "amount", "percentage"]),
            t("AccountFeeType", C::Enum, "Types of fees: BUYER_PREMIUM, SELLER_COMMISSION, etc."),
            t("AccountImageAssociation", C::Object, "Links images to account (logo, banner)")
                .with_fields(["imageId", "type", "order"]),
            t("CreateAccountInput", C::Input, "Input for creating a new account")
                .with_fields(["name", "email", "settings"]),
            t("UpdateAccountInput", C::Input, "Input for updating account details")
                .with_fields(["accountId", "name", "email", "settings"]),
            t("CreateAccountFeeInput", C::Input, "Input for creating account fee")
                .with_fields(["accountId", "type", "amount"]),
            t("OnboardPaymentAccountInput", C::Input, "Input for payment provider onboarding")
                .with_fields(["accountId", "provider", "returnUrl"]),
            t("OnboardPaymentAccountResponse", C::Object, "Response from payment onboarding")
                .with_fields(["url", "status", "expiresAt"]),
            t("ShopifyConnection", C::Object, "Active Shopify connection details")
                .with_fields(["id", "domain", "status", "lastSync"]),
        ],
    )
}

fn sales() -> Section {
    Section::new(
        "Sales",
        "sales",
        "Auctions, sales, and bidding events",
        vec![
            t("Sale", C::Object, "Main sale/auction object")
                .with_fields(["id", "title", "description", "status", "type", "dates"]),
            t("SaleConnection", C::Connection, "Paginated list of sales")
                .with_fields(["edges", "pageInfo", "totalCount"]),
            t("SalesEdge", C::Edge, "Edge containing sale node and cursor")
                .with_fields(["node", "cursor"]),
            t("SaleDates", C::Object, "Sale timing configuration")
                .with_fields(["openDate", "closeDate", "publishDate"]),
            t("SaleDatesInput", C::Input, "Input for setting sale dates")
                .with_fields(["openDate", "closeDate", "publishDate"]),
            t("SaleFilter", C::Input, "Filter criteria for querying sales")
                .with_fields(["status", "type", "dateRange", "searchTerm"]),
            t("SaleItem", C::Object, "Item within a sale context")
                .with_fields(["id", "item", "lotNumber", "status"]),
            t("SaleItemOrItem", C::Union, "Union of SaleItem or standalone Item"),
            t("SaleItemsConnection", C::Connection, "Paginated sale items")
                .with_fields(["edges", "pageInfo", "totalCount"]),
            t("SaleMetrics", C::Object, "Sale performance metrics")
                .with_fields(["totalBids", "uniqueBidders", "totalValue"]),
            t("SaleStatus", C::Enum, "Sale states: DRAFT, PUBLISHED, OPEN, CLOSING, CLOSED"),
            t("SaleType", C::Enum, "Auction types: TIMED, LIVE, HYBRID"),
            t("ClosingMethod", C::Enum, "How sale closes: SOFT_CLOSE, HARD_CLOSE, STAGGERED"),
            t("CreateSaleInput", C::Input, "Input for creating a new sale")
                .with_fields(["title", "description", "type", "dates"]),
            t("PublishSaleInput", C::Input, "Input to publish sale publicly")
                .with_fields(["saleId", "publishAt"]),
            t("CloseSaleInput", C::Input, "Input to close a sale")
                .with_fields(["saleId", "reason"]),
        ],
    )
}

fn items() -> Section {
    Section::new(
        "Items",
        "items",
        "Items, lots, and inventory management",
        vec![
            t("Item", C::Object, "Main item/lot object")
                .with_fields(["id", "title", "description", "status", "images"]),
            t("ItemDates", C::Object, "Item timing configuration")
                .with_fields(["openDate", "closeDate", "extendedTo"]),
            t("ItemFilter", C::Input, "Filter for querying items")
                .with_fields(["status", "category", "priceRange"]),
            t("ItemsConnection", C::Connection, "Paginated items list")
                .with_fields(["edges", "pageInfo", "totalCount"]),
            t("ItemsEdge", C::Edge, "Edge for item pagination").with_fields(["node", "cursor"]),
            t("ItemNote", C::Object, "Internal note on item")
                .with_fields(["id", "content", "author", "createdAt"]),
            t("ItemOrderField", C::Enum, "Sort fields: CREATED_AT, TITLE, LOT_NUMBER, PRICE"),
            t("ItemPrice", C::Object, "Item pricing information")
                .with_fields(["opening", "current", "reserve", "estimate"]),
            t("ItemStatus", C::Enum, "Item states: DRAFT, ACTIVE, SOLD, UNSOLD, WITHDRAWN"),
            t("CreateItemInput", C::Input, "Input for creating item")
                .with_fields(["title", "description", "category", "images"]),
            t("UpdateItemInput", C::Input, "Input for updating item")
                .with_fields(["itemId", "title", "description"]),
            t("SetItemWinnerInput", C::Input, "Set winning bidder")
                .with_fields(["itemId", "userId", "amount"]),
            t("Estimate", C::Object, "Price estimate range").with_fields(["low", "high", "currency"]),
            t("Tag", C::Object, "Tag/label object").with_fields(["id", "name", "color"]),
        ],
    )
}

fn bids() -> Section {
    Section::new(
        "Bids",
        "bids",
        "Bidding operations and management",
        vec![
            t("Bid", C::Object, "Bid object")
                .with_fields(["id", "amount", "userId", "itemId", "timestamp"]),
            t("BidPlaced", C::Union, "Union result of bid placement"),
            t("BidPlacedSuccess", C::Object, "Successful bid placement")
                .with_fields(["bid", "isLeading", "outbidUsers"]),
            t("BidPlacedError", C::Object, "Failed bid placement")
                .with_fields(["code", "message", "minimumBid"]),
            t("BidErrorCode", C::Enum, "Error codes: BELOW_MINIMUM, SALE_CLOSED, NOT_REGISTERED"),
            t("BidStatus", C::Enum, "Bid states: ACTIVE, OUTBID, WINNING, CANCELLED"),
            t("BidType", C::Enum, "Bid types: REGULAR, MAX, ABSENTEE, PHONE"),
            t("BidsConnection", C::Connection, "Paginated bids")
                .with_fields(["edges", "pageInfo", "totalCount"]),
            t("BidsEdge", C::Edge, "Edge for bid pagination").with_fields(["node", "cursor"]),
            t("BidIncrementTable", C::Object, "Bid increment rules")
                .with_fields(["ranges", "defaultIncrement"]),
            t("BidOnBehalfInput", C::Input, "Place bid on behalf of user")
                .with_fields(["itemId", "userId", "amount", "origin"]),
            t("BidOriginType", C::Enum, "Origin types: ONLINE, PADDLE, PHONE, ABSENTEE"),
            t("HighestBidInfo", C::Object, "Current highest bid info")
                .with_fields(["amount", "bidder", "timestamp", "isProxy"]),
            t("CancelLatestBidOnItemInput", C::Input, "Cancel latest bid")
                .with_fields(["itemId", "reason"]),
        ],
    )
}

fn users() -> Section {
    Section::new(
        "Users",
        "users",
        "Users, participants, and paddles",
        vec![
            t("User", C::Object, "User account object")
                .with_fields(["id", "email", "name", "status", "createdAt"]),
            t("UsersConnection", C::Connection, "Paginated users")
                .with_fields(["edges", "pageInfo", "totalCount"]),
            t("UserEdge", C::Edge, "Edge for user pagination").with_fields(["node", "cursor"]),
            t("UserAddress", C::Object, "User address")
                .with_fields(["street", "city", "state", "postalCode", "country"]),
            t("UserInfo", C::Object, "Extended user details")
                .with_fields(["firstName", "lastName", "phone", "company"]),
            t("UserToken", C::Object, "User authentication token")
                .with_fields(["token", "expiresAt", "refreshToken"]),
            t("UserIdType", C::Enum, "User ID types: ID, EMAIL, EXTERNAL_ID"),
            t("Participant", C::Object, "Sale participant")
                .with_fields(["id", "user", "paddle", "status"]),
            t("Paddle", C::Object, "Bidding paddle")
                .with_fields(["id", "number", "user", "sale", "status"]),
            t("PaddleType", C::Enum, "Paddle types: STANDARD, VIP, PHONE"),
            t("MailingAddress", C::Object, "Mailing address")
                .with_fields(["line1", "line2", "city", "state", "postalCode", "country"]),
            t("Permission", C::Enum, "User permissions: READ, WRITE, ADMIN, BID"),
        ],
    )
}

fn registrations() -> Section {
    Section::new(
        "Registrations",
        "registrations",
        "Sale and item registrations",
        vec![
            t("SaleRegistration", C::Object, "Sale registration record")
                .with_fields(["id", "user", "sale", "status", "createdAt"]),
            t("SaleRegistrationsConnection", C::Connection, "Paginated registrations")
                .with_fields(["edges", "pageInfo", "totalCount"]),
            t("SaleRegistrationEdge", C::Edge, "Edge for registration pagination")
                .with_fields(["node", "cursor"]),
            t("SaleRegistrationStatus", C::Enum, "Status: PENDING, APPROVED, REJECTED, CANCELLED"),
            t("SaleRegistrationType", C::Enum, "Registration types: STANDARD, VIP, DEALER"),
            t("CreateSaleRegistrationInput", C::Input, "Create registration")
                .with_fields(["saleId", "userId", "type"]),
            t("AcceptSaleRegistrationInput", C::Input, "Accept registration")
                .with_fields(["registrationId", "paddleNumber"]),
            t("RejectSaleRegistrationInput", C::Input, "Reject registration")
                .with_fields(["registrationId", "reason"]),
            t("SaleItemRegistration", C::Object, "Item-level registration")
                .with_fields(["id", "user", "item", "maxBid"]),
            t("BulkRegistrationInput", C::Input, "Bulk registration import")
                .with_fields(["saleId", "registrations"]),
        ],
    )
}

fn orders() -> Section {
    Section::new(
        "Orders",
        "orders",
        "Orders, payments, and invoices",
        vec![
            t("Order", C::Object, "Order object")
                .with_fields(["id", "user", "items", "total", "status"]),
            t("OrderConnection", C::Connection, "Paginated orders")
                .with_fields(["edges", "pageInfo", "totalCount"]),
            t("OrderEdge", C::Edge, "Edge for order pagination").with_fields(["node", "cursor"]),
            t("OrderLine", C::Object, "Order line item")
                .with_fields(["id", "item", "amount", "fees"]),
            t("OrderLineFee", C::Object, "Fee on order line")
                .with_fields(["type", "amount", "description"]),
            t("OrderLineType", C::Enum, "Line types: ITEM, FEE, SHIPPING, TAX"),
            t("OrderStatus", C::Enum, "Order states: PENDING, PAID, SHIPPED, COMPLETED"),
            t("CreateOrderInput", C::Input, "Create order")
                .with_fields(["userId", "saleId", "items"]),
            t("Payment", C::Object, "Payment record")
                .with_fields(["id", "amount", "status", "method", "timestamp"]),
            t("PaymentMethod", C::Enum, "Payment methods: CARD, BANK, WIRE, CHECK"),
            t("Invoice", C::Object, "Invoice record")
                .with_fields(["id", "order", "number", "total", "dueDate"]),
            t("Currency", C::Enum, "Currency codes: USD, EUR, GBP, etc."),
            t("Refund", C::Object, "Refund record")
                .with_fields(["id", "payment", "amount", "status"]),
            t("OrderFilter", C::Input, "Filter orders")
                .with_fields(["status", "userId", "saleId", "dateRange"]),
        ],
    )
}

fn media() -> Section {
    Section::new(
        "Media",
        "media",
        "Images and file uploads",
        vec![
            t("Image", C::Object, "Image object")
                .with_fields(["id", "url", "width", "height", "format"]),
            t("ImageAssociation", C::Object, "Image association")
                .with_fields(["imageId", "entityId", "entityType", "order"]),
            t("ImageType", C::Enum, "Image types: PRIMARY, GALLERY, THUMBNAIL"),
            t("ImageWithAssociations", C::Object, "Full image with associations")
                .with_fields(["image", "associations"]),
            t("CreateUploadUrlInput", C::Input, "Get presigned upload URL")
                .with_fields(["filename", "contentType", "size"]),
            t("UploadUrl", C::Object, "Presigned upload URL")
                .with_fields(["url", "fields", "expiresAt"]),
            t("DeleteImageInput", C::Input, "Delete image").with_fields(["imageId", "force"]),
            t("ImageVariant", C::Object, "Image size variant")
                .with_fields(["url", "width", "height", "format"]),
            t("ImageFormat", C::Enum, "Image formats: JPEG, PNG, WEBP, AVIF"),
            t("BulkUploadResult", C::Object, "Bulk upload result")
                .with_fields(["succeeded", "failed", "images"]),
        ],
    )
}

fn webhooks() -> Section {
    Section::new(
        "Webhooks",
        "webhooks",
        "Action hooks and API keys",
        vec![
            t("ActionHookSubscription", C::Object, "Webhook subscription")
                .with_fields(["id", "url", "events", "status"]),
            t("ActionHookSubscriptionInput", C::Input, "Create webhook")
                .with_fields(["url", "events", "headers"]),
            t("ActionHookLog", C::Object, "Webhook delivery log")
                .with_fields(["id", "subscription", "event", "response", "timestamp"]),
            t("ActionHookStatus", C::Enum, "Webhook states: ACTIVE, PAUSED, FAILED"),
            t("ActionType", C::Enum, "Event types: BID_PLACED, SALE_OPENED, ITEM_SOLD, etc."),
            t("TestActionHookResponse", C::Object, "Webhook test result")
                .with_fields(["success", "response", "latency"]),
            t("HttpHeader", C::Object, "HTTP header").with_fields(["name", "value"]),
            t("ApiKey", C::Object, "API key")
                .with_fields(["id", "name", "prefix", "role", "createdAt"]),
            t("ApiKeyConnection", C::Connection, "Paginated API keys")
                .with_fields(["edges", "pageInfo"]),
            t("ApiKeyCreated", C::Object, "Newly created API key")
                .with_fields(["key", "secret", "expiresAt"]),
            t("ApiKeyRole", C::Enum, "Key roles: READ, WRITE, ADMIN"),
            t("RevokeApiKeyInput", C::Input, "Revoke API key").with_fields(["keyId"]),
        ],
    )
}

fn config() -> Section {
    Section::new(
        "Config",
        "config",
        "Metadata, fees, and settings",
        vec![
            t("Metafield", C::Object, "Custom metadata field")
                .with_fields(["id", "key", "value", "type"]),
            t("MetafieldEntityType", C::Enum, "Entity types: ITEM, SALE, USER, ACCOUNT"),
            t("MetafieldValueType", C::Enum, "Value types: STRING, NUMBER, BOOLEAN, JSON"),
            t("SetMetafieldInput", C::Input, "Set metafield value")
                .with_fields(["entityId", "key", "value", "type"]),
            t("FeeRule", C::Object, "Fee calculation rule")
                .with_fields(["id", "type", "amount", "percentage", "ranges"]),
            t("FeeRuleType", C::Enum, "Rule types: FLAT, PERCENTAGE, TIERED"),
            t("RangeRule", C::Object, "Range-based rule").with_fields(["from", "to", "value"]),
            t("AccountSettings", C::Object, "Account settings")
                .with_fields(["timezone", "currency", "locale"]),
            t("NotificationSettings", C::Object, "Notification preferences")
                .with_fields(["email", "sms", "push"]),
            t("FeatureFlag", C::Object, "Feature flag").with_fields(["key", "enabled", "rollout"]),
        ],
    )
}

fn live() -> Section {
    Section::new(
        "Live",
        "live",
        "Live streaming and auctions",
        vec![
            t("LiveStream", C::Object, "Live stream object")
                .with_fields(["id", "url", "type", "status"]),
            t("LiveStreamInput", C::Input, "Create live stream")
                .with_fields(["url", "type", "startTime"]),
            t("LiveStreamType", C::Enum, "Stream types: YOUTUBE, VIMEO, PLATFORM, CUSTOM"),
            t("LiveItem", C::Object, "Currently live item")
                .with_fields(["item", "currentBid", "timeRemaining"]),
            t("SellLiveItemInput", C::Input, "Sell live item")
                .with_fields(["itemId", "winnerId", "amount"]),
            t("PassLiveItemInput", C::Input, "Pass on live item").with_fields(["itemId", "reason"]),
            t("LiveAuctionState", C::Object, "Live auction state")
                .with_fields(["currentItem", "nextItems", "bidders"]),
            t("LiveBidInput", C::Input, "Place live bid")
                .with_fields(["itemId", "amount", "paddleNumber"]),
            t("LiveClerkAction", C::Enum, "Clerk actions: FAIR_WARNING, GOING_ONCE, SOLD"),
            t("LiveStreamStatus", C::Enum, "Stream status: SCHEDULED, LIVE, ENDED"),
        ],
    )
}

fn core() -> Section {
    Section::new(
        "Core",
        "core",
        "Core types and scalars",
        vec![
            t("Node", C::Interface, "Base interface with ID field").with_fields(["id"]),
            t("PageInfo", C::Object, "Pagination information")
                .with_fields(["hasNextPage", "hasPreviousPage", "startCursor", "endCursor"]),
            t("PaginationDirection", C::Enum, "Page direction: FORWARD, BACKWARD"),
            t("Boolean", C::Scalar, "Boolean scalar type"),
            t("String", C::Scalar, "String scalar type"),
            t("Int", C::Scalar, "Integer scalar type"),
            t("Float", C::Scalar, "Float scalar type"),
            t("ID", C::Scalar, "Unique identifier scalar"),
            t("JSON", C::Scalar, "JSON scalar for arbitrary data"),
            t("DateTime", C::Scalar, "ISO 8601 date-time string"),
            t("Money", C::Scalar, "Monetary value with currency"),
            t("URL", C::Scalar, "Valid URL string"),
        ],
    )
}
