//! Статические ресурсы страницы: CDN-ссылки, стили и скрипт корзины.

pub const FONTS_CSS: &str =
    "https://fonts.googleapis.com/css2?family=Montserrat:wght@400;700;900&display=swap";
pub const SWIPER_CSS: &str = "https://cdn.jsdelivr.net/npm/swiper@11/swiper-bundle.min.css";
pub const SWIPER_JS: &str = "https://cdn.jsdelivr.net/npm/swiper@11/swiper-bundle.min.js";
pub const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.0/css/all.min.css";

/// `id` блока `<script type="application/json">` с настройками страницы
pub const CONFIG_ELEMENT_ID: &str = "catalog-config";

pub const STYLES: &str = r##"
:root{--bg:#000;--card:#0f0f0f;--accent:#25D366;--muted:#d0d0d0;--danger:#ff3b3b;--icon-bg: rgba(255,255,255,0.02);--header-height-desktop:90px;--header-height-mobile:110px}
*{box-sizing:border-box}html,body{height:100%}body{margin:0;background:var(--bg);font-family:'Montserrat',sans-serif;color:#fff;-webkit-font-smoothing:antialiased}
header{position:fixed;top:0;left:0;width:100%;background:var(--card);display:flex;justify-content:center;align-items:center;padding:12px 18px;z-index:10000;height:var(--header-height-desktop);box-shadow:0 2px 12px rgba(0,0,0,0.6)}
.header-inner{width:95%;max-width:1200px;display:flex;justify-content:space-between;align-items:center;gap:12px}
header h1{margin:0;color:#fff;font-weight:900;letter-spacing:0.4px;font-size:clamp(20px,2.6vw+12px,36px);line-height:1.05;text-align:left;max-width:62%;overflow-wrap:break-word}
.header-right{display:flex;align-items:center;gap:12px;justify-content:flex-end;width:38%}
.redes{display:flex;gap:10px;align-items:center}
.redes a{color:var(--danger);text-decoration:none;display:flex;align-items:center;justify-content:center;width:36px;height:36px;border-radius:8px;background:var(--icon-bg);font-size:18px}
#toggleCarrito{position:relative;background:var(--accent);color:#fff;padding:8px 12px;border-radius:20px;display:flex;align-items:center;gap:8px;font-weight:700;cursor:pointer;box-shadow:0 6px 18px rgba(0,0,0,0.45)}
#toggleCarrito .badge{background:var(--danger);color:#fff;font-weight:800;font-size:12px;padding:3px 7px;border-radius:12px;min-width:20px;text-align:center}
#carrito{position:fixed;top:calc(var(--header-height-desktop)+8px);right:20px;background:var(--card);border:2px solid var(--accent);padding:12px;width:360px;max-height:68vh;overflow-y:auto;border-radius:10px;transform:translateY(-8px);opacity:0;pointer-events:none;transition:all .18s ease;z-index:9999}
#carrito.visible{transform:translateY(0);opacity:1;pointer-events:auto}
#carrito h3{margin:0 0 10px;text-align:center;font-weight:800}
#carrito ul{list-style:none;padding:0;margin:0}
#carrito li{display:flex;justify-content:space-between;align-items:center;padding:8px 0;border-bottom:1px solid rgba(255,255,255,0.03)}
#carrito .empty{color:#bbb;text-align:center;padding:12px 0}
.catalogo{margin-top:calc(var(--header-height-desktop)+20px);width:95%;margin-left:auto;margin-right:auto;display:flex;flex-wrap:wrap;justify-content:space-around;gap:16px;padding-bottom:80px}
.producto{width:30%;background:var(--card);margin:10px;padding:16px;border-radius:12px;box-shadow:0 8px 24px rgba(0,0,0,0.6);transition:transform .12s ease}
.producto:hover{transform:translateY(-6px)}
.producto h2{font-size:18px;color:#fff;text-align:center;margin:8px 0;font-weight:800}
.producto .precio{font-size:16px;color:var(--muted);text-align:center;margin:6px 0;font-weight:700}
.producto .tallas{font-size:14px;color:var(--muted);text-align:center;margin:6px 0}
.swiper{width:100%;height:280px;border-radius:10px;overflow:hidden;background:#000}
.swiper-slide img{width:100%;height:100%;object-fit:cover;display:block}
.swiper-pagination{bottom:10px!important}
.boton{display:flex;align-items:center;justify-content:center;gap:8px;margin:12px auto 0;padding:12px 18px;background:#fff;color:#000;border:none;border-radius:10px;cursor:pointer;font-weight:900;font-size:16px}
#cerrarCarrito{position:absolute;top:8px;right:10px;background:none;border:none;color:#fff;font-size:16px;cursor:pointer}
#carrito-total{margin-top:12px;text-align:right;color:#ddd;font-weight:800}
#whatsapp{display:block;margin-top:12px;padding:12px;background:var(--accent);color:#fff;text-align:center;border-radius:8px;text-decoration:none;font-weight:800}
#whatsapp.disabled{background:#333;color:#999;pointer-events:none}
.cart-row{display:flex;justify-content:space-between;align-items:center;width:100%}
.cart-row span{flex:1;margin-right:8px}
.cart-remove{background:var(--danger);color:#fff;border:none;border-radius:6px;padding:6px 8px;cursor:pointer}
.sin-imagen{display:flex;align-items:center;justify-content:center;background:#222;color:#888}
.sin-resultados{width:100%;text-align:center;padding:40px;color:#ddd}
@media (min-width:1200px){header h1{font-size:34px} .redes a{width:40px;height:40px;font-size:20px}}
@media (max-width:1024px){.producto{width:45%}}
@media (max-width:768px){
  :root {--header-height-mobile:110px}
  header{height:var(--header-height-mobile);padding:12px 10px}
  .header-inner{width:96%;display:flex;flex-direction:column;align-items:center;gap:8px}
  header h1{font-size:clamp(18px,5.0vw,30px);text-align:center;max-width:100%;margin:0;padding:0 8px;line-height:1.04;word-break:break-word}
  .header-right{width:100%;display:flex;justify-content:center;gap:12px;align-items:center}
  .redes{gap:12px}
  .redes a{width:56px;height:56px;font-size:26px;border-radius:12px;background:var(--icon-bg);display:flex;align-items:center;justify-content:center}
  #toggleCarrito{padding:12px 14px;font-size:18px;border-radius:24px}
  #toggleCarrito .badge{min-width:28px;padding:6px 10px;font-size:13px}
  .catalogo{margin-top:calc(var(--header-height-mobile)+8px) !important;display:flex !important;flex-direction:column !important;align-items:center !important;gap:16px !important;padding-bottom:120px !important;height:calc(100vh - var(--header-height-mobile)) !important;overflow-y:auto !important;scroll-snap-type:y mandatory !important;-webkit-overflow-scrolling:touch !important;flex-wrap:nowrap !important}
  .producto{width:94% !important;padding:16px !important;margin:0 !important;border-radius:14px !important;height:calc(100vh - var(--header-height-mobile) - 80px) !important;min-height:380px !important;max-height:calc(100vh - var(--header-height-mobile) - 60px) !important;display:flex !important;flex-direction:column !important;justify-content:flex-start !important;scroll-snap-align:start !important;box-shadow:0 10px 30px rgba(0,0,0,0.6) !important}
  .producto h2{font-size:22px;margin:10px 0 8px}
  .producto .precio{font-size:18px}
  .producto .tallas{font-size:16px}
  .swiper{height:46% !important;border-radius:12px}
  .boton{padding:14px 20px;font-size:17px;border-radius:12px;margin-top:auto}
  #carrito{width:94% !important;right:2% !important;top:calc(var(--header-height-mobile)+8px) !important;max-height:60vh !important;padding:14px !important;border-radius:14px !important}
}
"##;

/// Скрипт корзины. Читает настройки из `#catalog-config`, функции
/// `reduceCart`/`parsePrice`/`cartTotal`/`orderSummary`/`orderLink` повторяют `cart.rs`.
pub const CART_SCRIPT: &str = r##"
document.addEventListener('DOMContentLoaded', function () {
  var config = JSON.parse(document.getElementById('catalog-config').textContent);

  document.querySelectorAll('.swiper').forEach(function (el) {
    new Swiper(el, {
      loop: true,
      pagination: { el: el.querySelector('.swiper-pagination'), clickable: true },
      autoplay: { delay: 3500, disableOnInteraction: false }
    });
  });

  // Same rules as the generator's Cart: add appends, remove by position, out of range is a no-op
  function reduceCart(items, action) {
    if (action.type === 'add') return items.concat([action.item]);
    if (action.type === 'remove' && action.index >= 0 && action.index < items.length) {
      return items.slice(0, action.index).concat(items.slice(action.index + 1));
    }
    return items;
  }

  function parsePrice(raw) {
    var m = String(raw).replace(/[^0-9.-]+/g, '').match(/^-?(\d+\.?\d*|\.\d+)/);
    return m ? parseFloat(m[0]) : null;
  }

  function cartTotal(items) {
    return items.reduce(function (sum, it) {
      var p = parsePrice(it.price);
      return p === null ? sum : sum + p;
    }, 0);
  }

  function orderSummary(items) {
    var text = 'Pedido desde ' + config.storeName + '\n\n';
    items.forEach(function (it, idx) {
      text += (idx + 1) + '. ' + it.name + ' - ' + config.currency + it.price + ' - Tallas: ' + it.sizes + '\n';
    });
    var total = cartTotal(items);
    if (total > 0) text += '\nTotal aproximado: ' + config.currency + total;
    return text;
  }

  function orderLink(items) {
    if (items.length === 0 || !config.contact) return null;
    return 'https://wa.me/' + config.contact + '?text=' + encodeURIComponent(orderSummary(items));
  }

  var panel = document.getElementById('carrito');
  var list = document.getElementById('lista-carrito');
  var badge = document.getElementById('cart-count');
  var totalEl = document.getElementById('carrito-total');
  var whatsapp = document.getElementById('whatsapp');
  var items = [];

  function dispatch(action) {
    items = reduceCart(items, action);
    render();
  }

  function render() {
    list.textContent = '';
    if (items.length === 0) {
      var empty = document.createElement('li');
      empty.className = 'empty';
      empty.textContent = 'El carrito está vacío';
      list.appendChild(empty);
      totalEl.textContent = '';
    } else {
      items.forEach(function (it, idx) {
        var li = document.createElement('li');
        var row = document.createElement('div');
        row.className = 'cart-row';
        var label = document.createElement('span');
        label.textContent = it.name + ' - ' + config.currency + it.price + ' - ' + it.sizes;
        var remove = document.createElement('button');
        remove.className = 'cart-remove';
        remove.textContent = 'Eliminar';
        remove.addEventListener('click', function () {
          dispatch({ type: 'remove', index: idx });
        });
        row.appendChild(label);
        row.appendChild(remove);
        li.appendChild(row);
        list.appendChild(li);
      });
      totalEl.textContent = 'Total aproximado: ' + config.currency + cartTotal(items);
    }
    badge.textContent = String(items.length);

    var link = orderLink(items);
    if (link === null) {
      whatsapp.href = '#';
      whatsapp.textContent = items.length === 0 ? 'Carrito vacío' : 'WhatsApp no disponible';
      whatsapp.classList.add('disabled');
    } else {
      whatsapp.href = link;
      whatsapp.textContent = 'Enviar pedido por WhatsApp';
      whatsapp.classList.remove('disabled');
    }
  }

  function setPanel(visible) {
    panel.classList.toggle('visible', visible);
    panel.setAttribute('aria-hidden', visible ? 'false' : 'true');
  }

  window.agregarCarrito = function (name, price, sizes) {
    dispatch({ type: 'add', item: { name: name, price: price, sizes: sizes } });
    setPanel(true);
    if (window.innerWidth <= 768) {
      setTimeout(function () { window.scrollBy({ top: 8, behavior: 'smooth' }); }, 150);
    }
  };

  document.getElementById('toggleCarrito').addEventListener('click', function () {
    setPanel(!panel.classList.contains('visible'));
  });
  document.getElementById('cerrarCarrito').addEventListener('click', function () {
    setPanel(false);
  });

  render();
});
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assets_cannot_break_out_of_their_elements() {
        assert!(!STYLES.contains("</style"));
        assert!(!CART_SCRIPT.contains("</script"));
    }

    #[test]
    fn test_script_uses_page_config_and_ids() {
        assert!(CART_SCRIPT.contains(CONFIG_ELEMENT_ID));
        for id in ["carrito", "lista-carrito", "cart-count", "carrito-total", "whatsapp", "toggleCarrito", "cerrarCarrito"] {
            assert!(CART_SCRIPT.contains(&format!("'{}'", id)), "missing #{}", id);
        }
        assert!(CART_SCRIPT.contains("window.agregarCarrito"));
    }
}
