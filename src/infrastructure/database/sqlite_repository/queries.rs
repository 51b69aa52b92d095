pub const UPSERT_PRODUCT: &str = r#"
INSERT INTO products (id, name, description, producer, category, images, price, location, owner_id, created_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
ON CONFLICT(id) DO UPDATE SET
    name = excluded.name,
    description = excluded.description,
    producer = excluded.producer,
    category = excluded.category,
    images = excluded.images,
    price = excluded.price,
    location = excluded.location,
    owner_id = excluded.owner_id,
    created_at = excluded.created_at
"#;

pub const SELECT_PRODUCT_BY_ID: &str = "SELECT * FROM products WHERE id = ?1";

pub const SELECT_ALL_PRODUCTS: &str = "SELECT * FROM products ORDER BY created_at DESC";

pub const SELECT_PRODUCTS_BY_OWNER: &str =
    "SELECT * FROM products WHERE owner_id = ?1 ORDER BY created_at DESC";

pub const SELECT_PRODUCTS_BY_CATEGORY: &str =
    "SELECT * FROM products WHERE category = ?1 ORDER BY created_at DESC";

pub const SELECT_PRODUCTS_BY_CITY: &str =
    "SELECT * FROM products WHERE location LIKE ?1 ORDER BY created_at DESC";

pub const SEARCH_PRODUCTS_BY_PRODUCER: &str =
    "SELECT * FROM products WHERE producer LIKE ?1 ORDER BY created_at DESC";

pub const DELETE_PRODUCT: &str = "DELETE FROM products WHERE id = ?1";

pub const UPSERT_SELLER: &str = r#"
INSERT INTO sellers (user_id, name, lastname, email, phone, address, entrepreneurship, photo_url, latitude, longitude)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
ON CONFLICT(user_id) DO UPDATE SET
    name = excluded.name,
    lastname = excluded.lastname,
    email = excluded.email,
    phone = excluded.phone,
    address = excluded.address,
    entrepreneurship = excluded.entrepreneurship,
    photo_url = excluded.photo_url,
    latitude = excluded.latitude,
    longitude = excluded.longitude
"#;

pub const SELECT_SELLER_BY_ID: &str = "SELECT * FROM sellers WHERE user_id = ?1";

pub const SELECT_ALL_SELLERS: &str = "SELECT * FROM sellers ORDER BY user_id";

pub const DELETE_SELLER: &str = "DELETE FROM sellers WHERE user_id = ?1";

pub const PROMOTE_USER_TO_SELLER: &str = "UPDATE users SET role = 'SELLER' WHERE id = ?1";

pub const UPSERT_USER: &str = r#"
INSERT INTO users (id, name, last_name, email, password_hash, role, phone, address, photo_url, created_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
ON CONFLICT(id) DO UPDATE SET
    name = excluded.name,
    last_name = excluded.last_name,
    email = excluded.email,
    password_hash = excluded.password_hash,
    role = excluded.role,
    phone = excluded.phone,
    address = excluded.address,
    photo_url = excluded.photo_url,
    created_at = excluded.created_at
"#;

pub const SELECT_USER_BY_ID: &str = "SELECT * FROM users WHERE id = ?1";

pub const SELECT_USER_BY_EMAIL: &str = "SELECT * FROM users WHERE email = ?1 COLLATE NOCASE";

pub const DELETE_USER: &str = "DELETE FROM users WHERE id = ?1";

pub const INSERT_FAVORITE: &str = r#"
INSERT INTO favorites (user_id, product_id, created_at)
VALUES (?1, ?2, ?3)
ON CONFLICT(user_id, product_id) DO UPDATE SET created_at = excluded.created_at
"#;

pub const DELETE_FAVORITE: &str = "DELETE FROM favorites WHERE user_id = ?1 AND product_id = ?2";

pub const SELECT_FAVORITES_BY_USER: &str =
    "SELECT * FROM favorites WHERE user_id = ?1 ORDER BY created_at DESC";

pub const SELECT_FAVORITE_PRODUCTS: &str = r#"
SELECT p.* FROM products p
INNER JOIN favorites f ON f.product_id = p.id
WHERE f.user_id = ?1
ORDER BY f.created_at DESC
"#;
