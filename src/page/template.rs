//! Fixed page chrome: styles, filtering script and the not-found page.

pub const STYLE: &str = r"
    body{font-family:system-ui,-apple-system,Segoe UI,Roboto,Helvetica,Arial;background:#f8fafc;color:#0f172a;padding:24px}
    .item{border-bottom:1px solid #e6e6e6;padding:12px 0}
    img{max-width:100%}
    .controls{display:flex;gap:8px;align-items:center;margin-bottom:12px}
    .search{flex:1}
  ";

/// Hides items that fail the text query or a non-`all` select, then updates
/// the visible count. Runs once on load and on every input change.
pub const FILTER_SCRIPT: &str = r"
    const list = document.getElementById('list');
    const items = Array.from(list.children);
    const q = document.getElementById('q');
    const source = document.getElementById('sourceSelect');
    const category = document.getElementById('categorySelect');
    function update(){
      const qs = q.value.trim().toLowerCase();
      const sv = source.value;
      const cv = category.value;
      let visible = 0;
      for(const it of items){
        const text = it.innerText.toLowerCase();
        const s = it.getAttribute('data-source');
        const c = it.getAttribute('data-category');
        const match = (sv==='all' || s===sv) && (cv==='all' || c===cv) && (qs==='' || text.includes(qs));
        it.style.display = match ? '' : 'none';
        if(match) visible++;
      }
      document.getElementById('count').innerText = visible + ' articles';
    }
    q.addEventListener('input', update);
    source.addEventListener('change', update);
    category.addEventListener('change', update);
    update();
  ";

pub const NOT_FOUND_PAGE: &str =
    r#"<!doctype html><meta charset="utf-8"><title>404</title><h1>404</h1><p>Not found</p>"#;
