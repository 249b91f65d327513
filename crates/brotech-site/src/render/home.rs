//! Home page: hero, services overview, impact numbers, testimonials.

use brotech_core::ImpactNumbers;
use maud::{Markup, PreEscaped, html};

use super::components::{
    ICON_ARROW_RIGHT, ICON_AWARD, ICON_CHEVRON_LEFT, ICON_CHEVRON_RIGHT, ICON_USERS, ICON_ZAP,
    OpenGraphData, impact_counter, page_shell,
};
use crate::content::{SERVICES, TESTIMONIALS};

/// Hero background image.
const HERO_IMAGE_URL: &str = "https://images.unsplash.com/photo-1518770660439-4636190af475?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&q=80";

/// Count-up animation for the impact numbers. Runs once on load; the final
/// value is already in the markup, so the page reads correctly without
/// script.
const COUNTER_SCRIPT: &str = r#"
document.querySelectorAll('[data-count]').forEach(function(el){
  var target=parseInt(el.dataset.count,10),start=null;
  function step(ts){
    if(start===null)start=ts;
    var p=Math.min((ts-start)/2000,1);
    el.textContent=Math.floor(p*target)+'+';
    if(p<1)requestAnimationFrame(step);
  }
  requestAnimationFrame(step);
});
"#;

/// Testimonial rotation: one repeating timer, cleared and restarted whenever
/// the index changes, so timers never stack. The index wraps modulo the slide
/// count in both directions.
const CAROUSEL_SCRIPT: &str = r#"
(function(){
  var slides=document.querySelectorAll('.testimonial');
  if(slides.length===0)return;
  var current=0,timer=null;
  function show(next){
    slides[current].classList.remove('active');
    current=(next+slides.length)%slides.length;
    slides[current].classList.add('active');
    restart();
  }
  function restart(){
    if(timer!==null)clearTimeout(timer);
    timer=setTimeout(function(){show(current+1)},5000);
  }
  document.getElementById('t-prev').addEventListener('click',function(){show(current-1)});
  document.getElementById('t-next').addEventListener('click',function(){show(current+1)});
  restart();
})();
"#;

/// Render the home page with the fetched (or default) impact numbers.
pub fn render(numbers: &ImpactNumbers, base_url: &str, site_name: &str) -> Markup {
    let description = "We build powerful, secure, and intelligent web solutions that \
                       drive growth. From stunning websites to advanced AI integrations, \
                       we bring your ideas to life.";

    let og = OpenGraphData {
        title: site_name,
        description,
        og_type: "website",
        image: Some(HERO_IMAGE_URL),
    };

    let body = html! {
        // Hero
        div class="hero" {
            h1 { "Your Vision, Our Code" }
            p { (description) }
            div class="hero-actions" {
                a class="btn btn-primary" href="/services" { "Get Started" }
                a class="btn btn-outline" href="/portfolio" { "View Portfolio" }
            }
        }

        // Services overview
        section class="section" id="services" {
            h2 class="section-title" { "Our Services" }
            p class="section-lede" {
                "We offer a comprehensive suite of services to meet all your digital needs."
            }
            div class="card-grid" {
                @for service in SERVICES.iter().take(6) {
                    div class="card" {
                        h3 { (service.title) }
                        p { (service.description) }
                    }
                }
            }
            div class="view-all" {
                a href="/services" { "View All Services " (PreEscaped(ICON_ARROW_RIGHT)) }
            }
        }

        // Impact numbers
        section class="impact" id="impact" {
            div class="section" {
                h2 class="section-title" { "Our Impact in Numbers" }
                div class="impact-grid" {
                    (impact_counter(ICON_ZAP, numbers.projects_completed, "Projects Completed"))
                    (impact_counter(ICON_USERS, numbers.happy_clients, "Happy Clients"))
                    (impact_counter(ICON_AWARD, numbers.years_of_experience, "Years of Experience"))
                }
            }
        }

        // Testimonials
        section class="testimonials" id="testimonials" {
            div class="section" {
                h2 class="section-title" { "What Our Clients Say" }
                div class="carousel" {
                    @for (index, testimonial) in TESTIMONIALS.iter().enumerate() {
                        div class=(if index == 0 { "testimonial active" } else { "testimonial" }) {
                            blockquote { "“" (testimonial.quote) "”" }
                            p class="who" { (testimonial.author) }
                            p class="company" { (testimonial.company) }
                        }
                    }
                    button id="t-prev" class="carousel-btn prev" aria-label="Previous testimonial" {
                        (PreEscaped(ICON_CHEVRON_LEFT))
                    }
                    button id="t-next" class="carousel-btn next" aria-label="Next testimonial" {
                        (PreEscaped(ICON_CHEVRON_RIGHT))
                    }
                }
            }
        }

        script { (PreEscaped(COUNTER_SCRIPT)) }
        script { (PreEscaped(CAROUSEL_SCRIPT)) }
    };

    page_shell(
        &format!("{site_name} — Your Vision, Our Code"),
        description,
        &format!("{base_url}/"),
        og,
        "/",
        body,
        site_name,
    )
}
