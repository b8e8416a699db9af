//! Trimmed copies of the site's markup.

pub static LISTING: &str = r#"<!doctype html>
<html>
<body>
  <div id="galleries">
    <main>
      <article>
        <a href="/view/1001/abcdef" title="My Series 2">
          <figure><img src="https://cdn.ksk.moe/t/1001/abcdef/320/001.jpg"></figure>
          <h3><span>Artist A</span><span>My Series 2</span></h3>
          <footer><span>Full</span></footer>
        </a>
        <strong>24 Pages</strong>
      </article>
      <article>
        <a href="https://ksk.moe/view/1000/fedcba" title="My Series">
          <figure><img src="/t/1000/fedcba/320/001.jpg"></figure>
          <h3><span>Artist B</span><span>My Series</span></h3>
          <footer><span>Color</span></footer>
        </a>
        <strong>20 Pages</strong>
      </article>
    </main>
  </div>
  <footer>
    <nav>
      <ul>
        <li><a class="active" href="/browse/page/1">1</a></li>
        <li><a href="/browse/page/2">2</a></li>
        <li><a href="/browse/page/9">Last</a></li>
      </ul>
    </nav>
  </footer>
</body>
</html>
"#;

pub static LISTING_LAST_PAGE: &str = r#"<!doctype html>
<html>
<body>
  <div id="galleries"><main></main></div>
  <footer>
    <nav>
      <ul>
        <li><a href="/browse/page/1">First</a></li>
        <li><a class="active" href="/browse/page/9">9</a></li>
        <li><a href="/browse/page/9">Last</a></li>
      </ul>
    </nav>
  </footer>
</body>
</html>
"#;

pub static VIEW: &str = r#"<!doctype html>
<html>
<body>
  <main id="gallery">
    <section id="cover">
      <a href="/read/42/my-title/1">
        <figure><img src="https://cdn.ksk.moe/t/42/hash/896/001.jpg"></figure>
      </a>
    </section>
    <section id="metadata">
      <h1>My Title 3</h1>
      <div>
        <strong>Artist</strong>
        <div>
          <a href="/artists/a"><span>A</span><span>12</span></a>
          <a href="/artists/b"><span>B</span><span>3</span></a>
        </div>
      </div>
      <div>
        <strong>Circle</strong>
        <div><a href="/circles/circle-c"><span>Circle C</span></a></div>
      </div>
      <div>
        <strong>Parody</strong>
        <div><a href="/parodies/original-work"><span>Original Work</span></a></div>
      </div>
      <div>
        <strong>Magazine</strong>
        <div><a href="/magazines/comic-x"><span>Comic X</span></a></div>
      </div>
      <div>
        <strong>Tags</strong>
        <div>
          <a href="/tags/y"><span>y</span></a>
          <a href="/tags/x"><span>x</span></a>
        </div>
      </div>
      <div>
        <strong>Source</strong>
        <div><a href="/out/fakku"><span>Fakku</span></a></div>
      </div>
      <div>
        <strong>Pages</strong>
        <div><a href="/browse?ps=3&amp;pe=3"><span>3 Pages</span></a></div>
      </div>
      <div>
        <strong>Size</strong>
        <div><span>31.5 MiB</span><span>(32,256 KiB)</span></div>
      </div>
      <div>
        <strong>Uploaded</strong>
        <div><time data-timestamp="1650000000">2022-04-15</time></div>
      </div>
      <div>
        <strong>Published</strong>
        <div><time data-timestamp="1640000000">2021-12-20</time></div>
      </div>
    </section>
    <section id="previews">
      <img src="https://cdn.ksk.moe/t/42/hash/320/001.jpg">
      <img src="https://cdn.ksk.moe/t/42/hash/320/002.jpg">
      <img data-src="https://cdn.ksk.moe/t/42/hash/320/003.jpg">
    </section>
  </main>
</body>
</html>
"#;

pub static VIEW_NO_PREVIEWS: &str = r#"<!doctype html>
<html>
<body>
  <main id="gallery">
    <section id="cover">
      <a href="/read/43/other/1">
        <figure><img src="https://cdn.ksk.moe/t/43/hash/896/001.jpg"></figure>
      </a>
    </section>
    <section id="metadata">
      <h1>Other</h1>
      <div>
        <strong>Artist</strong>
        <div><a href="/artists/c"><span>C</span></a></div>
      </div>
      <div>
        <strong>Pages</strong>
        <div><a href="/browse?ps=3&amp;pe=3"><span>3 Pages</span></a></div>
      </div>
    </section>
  </main>
</body>
</html>
"#;

pub static VIEW_MINIMAL: &str = r#"<!doctype html>
<html>
<body>
  <main id="gallery">
    <section id="cover">
      <figure><img src="https://cdn.ksk.moe/t/7/hash/896/01.jpg"></figure>
    </section>
    <section id="metadata">
      <h1>Bare</h1>
      <div>
        <strong>Artist</strong>
        <div><a href="/artists/solo"><span>Solo</span></a></div>
      </div>
      <div>
        <strong>Pages</strong>
        <div><a href="/browse?ps=0&amp;pe=0"><span>0 Pages</span></a></div>
      </div>
    </section>
  </main>
</body>
</html>
"#;

pub static VIEW_LOWERCASE_LABELS: &str = r#"<!doctype html>
<html>
<body>
  <main id="gallery">
    <section id="cover">
      <figure><img src="https://cdn.ksk.moe/t/8/hash/896/1.jpg"></figure>
    </section>
    <section id="metadata">
      <h1>Lower</h1>
      <div>
        <strong>pages</strong>
        <div><a href="/browse?ps=5&amp;pe=5"><span>5 pages</span></a></div>
      </div>
      <div>
        <strong>size</strong>
        <div><span>1.2 MiB</span></div>
      </div>
      <div>
        <strong>uploaded</strong>
        <div>
          <time data-timestamp="9223372036854776">far future</time>
          <time data-timestamp="1650000000">2022-04-15</time>
        </div>
      </div>
    </section>
  </main>
</body>
</html>
"#;

pub static NOT_A_WORK: &str = r#"<!doctype html>
<html>
<body>
  <main><p>Just a moment...</p></main>
</body>
</html>
"#;
