// Page-wide stylesheet. Component-specific rules live next to their components.
pub const GLOBAL_CSS: &str = r#"
:root {
    --bg: #ffffff;
    --bg-alt: #f9fafb;
    --fg: #000000;
    --muted: #4b5563;
    --card-bg: linear-gradient(135deg, #ffffff, #f9fafb);
    --card-border: #e5e7eb;
    --input-bg: #ffffff;
    --input-border: #d1d5db;
    --nav-bg: rgba(255, 255, 255, 0.95);
    --dot: #d1d5db;
    --gold: #facc15;
    --gold-deep: #ca8a04;
}

html.dark {
    --bg: #000000;
    --bg-alt: #111827;
    --fg: #ffffff;
    --muted: #d1d5db;
    --card-bg: linear-gradient(135deg, #1f2937, #111827);
    --card-border: #374151;
    --input-bg: rgba(0, 0, 0, 0.5);
    --input-border: #4b5563;
    --nav-bg: rgba(0, 0, 0, 0.95);
    --dot: #4b5563;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    background: var(--bg);
    color: var(--fg);
    overflow-x: hidden;
    transition: background-color 0.5s, color 0.5s;
}

.gold-text {
    background: linear-gradient(90deg, var(--gold), var(--gold-deep));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.muted {
    color: var(--muted);
}

/* navigation */
.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: var(--nav-bg);
    backdrop-filter: blur(4px);
    border-bottom: 1px solid var(--card-border);
}

.nav-content {
    max-width: 80rem;
    height: 4rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-logo {
    display: flex;
    align-items: center;
    gap: 1rem;
    font-size: 1.25rem;
    font-weight: 700;
    text-decoration: none;
}

.nav-logo-mark {
    width: 3rem;
    height: 3rem;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    background: #000;
    box-shadow: 0 0 0 3px var(--gold);
    transition: transform 0.3s;
}

.nav-logo:hover .nav-logo-mark {
    transform: scale(1.1);
}

.nav-right {
    display: flex;
    align-items: center;
    gap: 2rem;
}

.nav-link {
    position: relative;
    padding: 0.5rem 1rem;
    border: none;
    background: none;
    color: var(--muted);
    font-size: 0.875rem;
    font-weight: 500;
    cursor: pointer;
    transition: color 0.3s;
}

.nav-link::after {
    content: '';
    position: absolute;
    left: 0;
    bottom: 0;
    width: 100%;
    height: 2px;
    background: linear-gradient(90deg, var(--gold), var(--gold-deep));
    transform: scaleX(0);
    transition: transform 0.3s;
}

.nav-link:hover {
    color: var(--fg);
}

.nav-link:hover::after,
.nav-link.active::after {
    transform: scaleX(1);
}

.nav-link.active {
    color: var(--gold);
}

.theme-toggle {
    width: 2.75rem;
    height: 2.75rem;
    border-radius: 50%;
    border: 2px solid var(--gold);
    background: none;
    color: var(--gold);
    font-size: 1.1rem;
    cursor: pointer;
    transition: transform 0.3s, background 0.3s, color 0.3s;
}

.theme-toggle:hover {
    transform: scale(1.1);
    background: var(--gold);
    color: #000;
}

.burger-menu {
    display: none;
    flex-direction: column;
    gap: 5px;
    padding: 0.5rem;
    border: none;
    background: none;
    cursor: pointer;
}

.burger-menu span {
    width: 1.5rem;
    height: 2px;
    background: var(--fg);
}

.mobile-menu {
    display: none;
}

/* layout */
.page-section {
    position: relative;
    padding: 6rem 0;
    background: var(--bg);
}

.page-section.alt {
    background: var(--bg-alt);
}

.section-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.section-inner.narrow {
    max-width: 56rem;
}

.section-heading {
    text-align: center;
    margin-bottom: 4rem;
}

.section-heading h2 {
    margin: 0 0 1.5rem;
    font-size: clamp(2.5rem, 5vw, 3.75rem);
    font-weight: 700;
}

.heading-rule {
    width: 6rem;
    height: 4px;
    margin: 0 auto;
    border-radius: 9999px;
    background: linear-gradient(90deg, var(--gold), var(--gold-deep));
}

.card {
    border-radius: 1.5rem;
    border: 1px solid var(--card-border);
    background: var(--card-bg);
    transition: transform 0.5s, border-color 0.5s, box-shadow 0.5s;
}

.card:hover {
    transform: scale(1.03);
    border-color: rgba(250, 204, 21, 0.5);
    box-shadow: 0 25px 50px -12px rgba(250, 204, 21, 0.1);
}

.gold-button,
.outline-button {
    padding: 1rem 2rem;
    border-radius: 9999px;
    font-size: 1rem;
    font-weight: 600;
    cursor: pointer;
    transition: transform 0.3s, box-shadow 0.3s, background 0.3s, color 0.3s;
}

.gold-button {
    border: none;
    background: linear-gradient(90deg, var(--gold), var(--gold-deep));
    color: #000;
}

.gold-button.wide {
    width: 100%;
}

.outline-button {
    border: 2px solid var(--gold);
    background: none;
    color: var(--gold);
}

.outline-button.small {
    padding: 0.6rem 1.5rem;
    font-size: 0.875rem;
}

.gold-button:hover,
.outline-button:hover {
    transform: scale(1.05);
    box-shadow: 0 10px 30px rgba(250, 204, 21, 0.25);
}

.outline-button:hover {
    background: var(--gold);
    color: #000;
}

/* hero */
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
    text-align: center;
}

.hero-background {
    position: absolute;
    inset: 0;
    background: linear-gradient(135deg, var(--bg), var(--bg-alt), var(--bg));
}

.orb {
    position: absolute;
    border-radius: 50%;
    filter: blur(60px);
    background: rgba(250, 204, 21, 0.15);
    animation: float 8s ease-in-out infinite;
}

.orb-one { width: 18rem; height: 18rem; top: 15%; left: 10%; }
.orb-two { width: 24rem; height: 24rem; bottom: 10%; right: 10%; animation-delay: 2s; }
.orb-three { width: 12rem; height: 12rem; top: 50%; left: 50%; animation-delay: 4s; }

.particle {
    position: absolute;
    width: 4px;
    height: 4px;
    border-radius: 50%;
    background: var(--gold);
    opacity: 0.6;
    animation: float 6s ease-in-out infinite;
}

.grid-pattern {
    position: absolute;
    inset: 0;
    opacity: 0.05;
    background-image: linear-gradient(var(--gold) 1px, transparent 1px),
        linear-gradient(90deg, var(--gold) 1px, transparent 1px);
    background-size: 50px 50px;
}

.hero-content {
    position: relative;
    z-index: 1;
    max-width: 64rem;
    padding: 6rem 1.5rem 0;
}

.hero-logo {
    position: relative;
    width: 10rem;
    height: 10rem;
    margin: 0 auto 3rem;
}

.hero-logo-ring {
    position: absolute;
    inset: 0;
    border-radius: 50%;
    background: linear-gradient(90deg, var(--gold), var(--gold-deep));
    animation: spin 20s linear infinite;
}

.hero-logo-core {
    position: absolute;
    inset: 0.5rem;
    border-radius: 50%;
    background: var(--bg);
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
}

.hero-logo-crown {
    font-size: 2.5rem;
}

.hero-logo-letter {
    font-size: 2rem;
    font-weight: 700;
    color: var(--gold);
}

.hero-title {
    margin: 0 0 1.5rem;
    font-size: clamp(3rem, 8vw, 6rem);
    font-weight: 700;
    line-height: 1.1;
}

.hero-subtitle {
    max-width: 48rem;
    margin: 0 auto 3rem;
    font-size: 1.25rem;
    line-height: 1.7;
    color: var(--muted);
}

.hero-cta-group {
    display: flex;
    flex-wrap: wrap;
    gap: 1.5rem;
    justify-content: center;
}

.scroll-hint {
    position: absolute;
    bottom: 2rem;
    left: 50%;
    transform: translateX(-50%);
    font-size: 2rem;
    color: var(--gold);
    animation: bounce 2s infinite;
}

/* about */
.about-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
    gap: 4rem;
    align-items: center;
}

.about-portrait img {
    width: 100%;
    height: 37.5rem;
    object-fit: cover;
    border-radius: 1.5rem;
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
}

.about-copy h3 {
    margin: 0 0 1rem;
    font-size: 1.875rem;
}

.about-copy p {
    font-size: 1.125rem;
    line-height: 1.7;
    color: var(--muted);
}

.stats-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1.5rem;
    margin-top: 2rem;
}

.stat-card {
    text-align: center;
}

.stat-icon {
    color: var(--gold);
    font-size: 1.5rem;
}

.stat-number {
    font-size: 1.875rem;
    font-weight: 700;
    color: var(--gold);
}

.stat-label {
    font-size: 0.875rem;
    color: var(--muted);
}

/* services */
.services-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
    gap: 2rem;
}

.service-card {
    display: flex;
    gap: 1.5rem;
    padding: 2rem;
}

.service-icon {
    font-size: 2rem;
    flex-shrink: 0;
    transition: transform 0.3s;
}

.service-card:hover .service-icon {
    transform: scale(1.1) rotate(12deg);
}

.service-body h3 {
    margin: 0 0 1rem;
    font-size: 1.5rem;
    font-weight: 600;
}

.feature-list {
    list-style: none;
    margin: 1.5rem 0 0;
    padding: 0;
}

.feature-list li {
    display: flex;
    gap: 0.5rem;
    margin-bottom: 0.5rem;
    font-size: 0.875rem;
    color: var(--muted);
}

.feature-list .star {
    color: var(--gold);
}

/* portfolio */
.portfolio-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
    gap: 2rem;
    margin-bottom: 3rem;
}

.portfolio-card {
    overflow: hidden;
}

.portfolio-image {
    position: relative;
    overflow: hidden;
}

.portfolio-image img {
    width: 100%;
    height: 16rem;
    object-fit: cover;
    display: block;
    transition: transform 0.7s;
}

.portfolio-card.featured .portfolio-image img {
    height: 20rem;
}

.portfolio-card:hover .portfolio-image img {
    transform: scale(1.1);
}

.portfolio-category {
    position: absolute;
    top: 1rem;
    left: 1rem;
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    background: linear-gradient(90deg, var(--gold), var(--gold-deep));
    color: #000;
    font-size: 0.75rem;
    font-weight: 600;
}

.portfolio-body {
    padding: 1.5rem;
}

.portfolio-body h3 {
    margin: 0 0 0.75rem;
    font-size: 1.25rem;
}

/* contact */
.contact-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
    gap: 4rem;
}

.contact-info h3 {
    margin: 0 0 1.5rem;
    font-size: 1.875rem;
}

.contact-channels {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    margin: 2rem 0;
}

.contact-channel {
    display: flex;
    align-items: center;
    gap: 1rem;
    padding: 1rem 1.5rem;
    color: inherit;
    text-decoration: none;
}

.channel-icon {
    color: var(--gold);
}

.channel-label {
    font-weight: 600;
}

.contact-image img {
    width: 100%;
    height: 16rem;
    margin-top: 2rem;
    object-fit: cover;
    border-radius: 1.5rem;
}

.booking-card {
    padding: 2rem;
}

.social-links {
    display: flex;
    gap: 1rem;
    margin-top: 2rem;
}

.social-link {
    width: 3rem;
    height: 3rem;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    border: 1px solid var(--card-border);
    background: var(--card-bg);
    color: var(--fg);
    text-decoration: none;
    transition: transform 0.3s, background 0.3s;
}

.social-link:hover {
    transform: scale(1.1);
    background: linear-gradient(90deg, var(--gold), var(--gold-deep));
    color: #000;
}

/* footer */
.site-footer {
    padding: 3rem 0;
    border-top: 1px solid var(--card-border);
    background: var(--bg);
}

.footer-inner {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    justify-content: space-between;
    gap: 2rem;
}

.footer-brand {
    font-size: 1.5rem;
    font-weight: 700;
}

.footer-link {
    color: var(--muted);
    font-size: 0.875rem;
}

.footer-link:hover {
    color: var(--gold);
}

/* floating contact shortcuts */
.floating-contacts {
    position: fixed;
    right: 1.5rem;
    bottom: 1.5rem;
    z-index: 50;
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}

.floating-contact {
    width: 3.5rem;
    height: 3.5rem;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.4rem;
    text-decoration: none;
    color: var(--fg);
    border: 1px solid var(--card-border);
    background: var(--card-bg);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.3);
    transition: transform 0.3s, box-shadow 0.3s, background 0.3s;
}

.floating-contact:hover {
    transform: scale(1.1);
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.4);
    background: #16a34a;
    color: #fff;
}

.floating-contact[aria-label="Instagram"]:hover {
    background: linear-gradient(90deg, #9333ea, #db2777);
}

/* entrance animations, toggled by the visibility map */
.pre-reveal {
    opacity: 0;
    transform: translateY(2.5rem);
}

.pre-reveal-scale {
    opacity: 0;
    transform: scale(0.95);
}

.animate-fade-in-up {
    animation: fadeInUp 0.8s ease-out both;
}

/* custom cursor */
body.custom-cursor-active,
body.custom-cursor-active * {
    cursor: none !important;
}

.custom-cursor {
    width: 20px;
    height: 20px;
    margin: -10px 0 0 -10px;
    border-radius: 50%;
    border: 2px solid var(--gold);
    background: rgba(250, 204, 21, 0.15);
    transition: width 0.2s, height 0.2s, margin 0.2s, background 0.2s;
}

.custom-cursor.hover {
    width: 40px;
    height: 40px;
    margin: -20px 0 0 -20px;
    background: rgba(250, 204, 21, 0.3);
}

.custom-cursor.click {
    transform: scale(0.8);
}

.cursor-trail {
    position: fixed;
    width: 6px;
    height: 6px;
    margin: -3px 0 0 -3px;
    border-radius: 50%;
    background: var(--gold);
    pointer-events: none;
    z-index: 9999;
    animation: trailFade 1.2s ease-out forwards;
}

@keyframes fadeInUp {
    from { opacity: 0; transform: translateY(2.5rem); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes float {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-20px); }
}

@keyframes spin {
    to { transform: rotate(360deg); }
}

@keyframes bounce {
    0%, 100% { transform: translate(-50%, 0); }
    50% { transform: translate(-50%, -10px); }
}

@keyframes trailFade {
    from { opacity: 0.8; transform: scale(1); }
    to { opacity: 0; transform: scale(0.2); }
}

@media (max-width: 768px) {
    .nav-right {
        display: none;
    }

    .burger-menu {
        display: flex;
    }

    .mobile-menu.open {
        display: flex;
        flex-direction: column;
        padding: 1rem 1.5rem;
        border-top: 1px solid var(--card-border);
        background: var(--nav-bg);
        animation: fadeInUp 0.3s ease-out;
    }

    .mobile-menu .nav-link {
        text-align: left;
        padding: 0.75rem 0;
    }

    .mobile-menu .nav-link::after {
        display: none;
    }

    .stats-grid {
        grid-template-columns: 1fr;
    }

    .about-portrait img {
        height: 24rem;
    }
}

@media (hover: none) {
    .custom-cursor,
    .cursor-trail {
        display: none;
    }

    body.custom-cursor-active,
    body.custom-cursor-active * {
        cursor: auto !important;
    }
}
"#;
