//! Selectors and class names shared with the page markup and stylesheet.

pub const HEADER: &str = ".header";
pub const MENU_BUTTON: &str = ".mobile-menu-btn";
pub const NAV: &str = ".nav";
pub const NAV_LINKS: &str = ".nav__link";
pub const CONTACT_FORM: &str = "#contactForm";
pub const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";
pub const INTERNAL_ANCHORS: &str = "a[href^=\"#\"]";
pub const SECTIONS: &str = "section[id]";
pub const IMAGES: &str = "img";
pub const TOAST: &str = ".message-toast";

pub const NAV_OPEN: &str = "nav--open";
pub const MENU_BUTTON_OPEN: &str = "mobile-menu-btn--open";
pub const HEADER_SCROLLED: &str = "header--scrolled";
pub const NAV_LINK_ACTIVE: &str = "nav__link--active";
pub const BUTTON_LOADING: &str = "btn--loading";
pub const REVEALED: &str = "fade-in";
pub const PRINTING: &str = "printing";

/// Attribute the reveal rule stamps on watched elements so intersection
/// entries can be mapped back to a stable key.
pub const REVEAL_KEY_ATTR: &str = "data-reveal-key";

/// Behavior classes the page script depends on. Appended to `<head>` once at
/// start-up.
pub const BEHAVIOR_STYLESHEET: &str = r#"
  .fade-in {
    opacity: 1 !important;
    transform: translateY(0) !important;
  }

  .nav__link--active {
    color: var(--color-primary) !important;
  }

  .nav__link--active::after {
    width: 100% !important;
  }

  .header--scrolled {
    background: rgba(255, 255, 255, 0.98);
    box-shadow: var(--shadow-sm);
  }

  .mobile-menu-btn--open span:nth-child(1) {
    transform: rotate(45deg) translate(5px, 5px);
  }

  .mobile-menu-btn--open span:nth-child(2) {
    opacity: 0;
  }

  .mobile-menu-btn--open span:nth-child(3) {
    transform: rotate(-45deg) translate(7px, -6px);
  }

  @media (max-width: 768px) {
    .nav {
      position: fixed;
      top: 70px;
      left: 0;
      right: 0;
      background: var(--color-surface);
      border-bottom: 1px solid var(--color-border);
      transform: translateY(-100%);
      transition: transform 0.3s ease;
      z-index: 999;
    }

    .nav--open {
      transform: translateY(0);
    }

    .nav__list {
      flex-direction: column;
      padding: var(--space-20);
      gap: var(--space-16);
    }

    .nav__link {
      padding: var(--space-12);
      display: block;
      text-align: center;
      border-bottom: 1px solid var(--color-border);
    }

    .nav__link:last-child {
      border-bottom: none;
    }
  }

  .btn {
    position: relative;
    overflow: hidden;
  }

  .btn::before {
    content: '';
    position: absolute;
    top: 50%;
    left: 50%;
    width: 0;
    height: 0;
    background: rgba(255, 255, 255, 0.2);
    border-radius: 50%;
    transform: translate(-50%, -50%);
    transition: width 0.6s, height 0.6s;
  }

  .btn:hover::before {
    width: 300px;
    height: 300px;
  }

  .btn > * {
    position: relative;
    z-index: 1;
  }
"#;
